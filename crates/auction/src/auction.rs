use crate::{seal_bid, AuctionError, AuctionEvent, AuctionPhase, PhaseClock};
use alloy::primitives::{Address, B256, U256};
use campus_token::Token;
use campus_types::{CallContext, EventJournal};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// A bidder's entry in the auction book.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedBid {
    /// The commitment submitted during the bidding window.
    commitment: B256,
    /// The deposit escrowed with the commitment.
    deposit: U256,
    /// The opened value, once revealed.
    revealed: Option<U256>,
}

impl SealedBid {
    /// The commitment submitted during the bidding window.
    pub const fn commitment(&self) -> B256 {
        self.commitment
    }

    /// The deposit escrowed with the commitment.
    pub const fn deposit(&self) -> U256 {
        self.deposit
    }

    /// The opened value, once revealed.
    pub const fn revealed(&self) -> Option<U256> {
        self.revealed
    }
}

/// A sealed-bid auction over an ERC20 escrow.
///
/// Bidders commit [`seal_bid`] digests with a covering deposit while
/// bidding is open, open them during the reveal window, and anyone may
/// settle once the window closes. Settlement pays the seller the highest
/// revealed value and refunds every other escrowed wei, leaving the
/// auction's token balance at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedBidAuction {
    /// The address this instance is deployed at.
    address: Address,
    /// The account paid the winning bid.
    seller: Address,
    /// The ledger deposits are escrowed on.
    token: Address,
    /// The smallest acceptable deposit.
    min_bid: U256,
    /// Maps timestamps onto lifecycle phases.
    clock: PhaseClock,
    /// The book of sealed bids.
    bids: HashMap<Address, SealedBid>,
    /// Bidders in commit order, for deterministic settlement.
    bidders: Vec<Address>,
    /// The highest value opened so far.
    highest_bid: U256,
    /// The account that opened the highest value.
    winner: Option<Address>,
    /// Set once settlement has run.
    ended: bool,
    /// Journal of emitted events.
    events: EventJournal<AuctionEvent>,
}

impl SealedBidAuction {
    /// Deploy an auction at `address` over the ledger at `token`.
    ///
    /// The deployer is the seller. Bidding stays open for
    /// `bidding_duration` seconds past the deploy timestamp.
    pub fn deploy(
        address: Address,
        ctx: CallContext,
        token: Address,
        min_bid: U256,
        bidding_duration: u64,
    ) -> Self {
        let clock = PhaseClock::new(ctx.timestamp().saturating_add(bidding_duration));
        info!(
            auction = %address,
            seller = %ctx.sender(),
            %min_bid,
            deadline = clock.deadline(),
            "deployed sealed-bid auction"
        );
        Self {
            address,
            seller: ctx.sender(),
            token,
            min_bid,
            clock,
            bids: HashMap::new(),
            bidders: Vec::new(),
            highest_bid: U256::ZERO,
            winner: None,
            ended: false,
            events: EventJournal::new(),
        }
    }

    /// Submit a sealed bid, escrowing `deposit` from the caller.
    ///
    /// The caller must have approved the auction on the ledger. One bid per
    /// account, the deposit must cover the minimum bid, and the commitment
    /// can only be honored later if the deposit also covers the sealed
    /// value.
    pub fn submit_bid(
        &mut self,
        ctx: CallContext,
        token: &mut Token,
        commitment: B256,
        deposit: U256,
    ) -> Result<(), AuctionError> {
        if !self.clock.bidding_open(ctx.timestamp()) {
            return Err(AuctionError::BiddingClosed);
        }
        if self.bids.contains_key(&ctx.sender()) {
            return Err(AuctionError::AlreadyBid);
        }
        if deposit < self.min_bid {
            return Err(AuctionError::DepositBelowMinimum { deposit, min_bid: self.min_bid });
        }

        token.transfer_from(ctx.reattributed(self.address), ctx.sender(), self.address, deposit)?;

        self.bids.insert(ctx.sender(), SealedBid { commitment, deposit, revealed: None });
        self.bidders.push(ctx.sender());
        self.events.record(AuctionEvent::BidSubmitted { bidder: ctx.sender(), deposit });
        debug!(auction = %self.address, bidder = %ctx.sender(), %deposit, "sealed bid in");
        Ok(())
    }

    /// Open the caller's commitment during the reveal window.
    ///
    /// The value and secret must reproduce the committed digest, and the
    /// value must fit inside the escrowed deposit. The first account to
    /// open a given value beats later equal reveals.
    pub fn reveal_bid(
        &mut self,
        ctx: CallContext,
        value: U256,
        secret: &str,
    ) -> Result<(), AuctionError> {
        match self.clock.phase_at(ctx.timestamp()) {
            AuctionPhase::Bidding => return Err(AuctionError::BiddingStillOpen),
            AuctionPhase::Closed => return Err(AuctionError::RevealClosed),
            AuctionPhase::Reveal => {}
        }

        let bidder = ctx.sender();
        let bid = self.bids.get_mut(&bidder).ok_or(AuctionError::UnknownBidder { bidder })?;
        if bid.revealed.is_some() {
            return Err(AuctionError::AlreadyRevealed);
        }
        if seal_bid(value, secret) != bid.commitment {
            return Err(AuctionError::CommitmentMismatch);
        }
        if value > bid.deposit {
            return Err(AuctionError::RevealExceedsDeposit { value, deposit: bid.deposit });
        }

        bid.revealed = Some(value);
        if value > self.highest_bid {
            self.highest_bid = value;
            self.winner = Some(bidder);
        }
        self.events.record(AuctionEvent::BidRevealed { bidder, value });
        debug!(auction = %self.address, %bidder, %value, "bid revealed");
        Ok(())
    }

    /// Settle the auction once the reveal window has closed.
    ///
    /// Pays the seller the highest revealed value, refunds every other
    /// bidder their full deposit and the winner the excess over the winning
    /// value, and returns the seller's proceeds. Runs once; anyone may call
    /// it.
    pub fn end_auction(
        &mut self,
        ctx: CallContext,
        token: &mut Token,
    ) -> Result<U256, AuctionError> {
        if !self.clock.closed(ctx.timestamp()) {
            return Err(AuctionError::RevealNotOver);
        }
        if self.ended {
            return Err(AuctionError::AlreadyEnded);
        }
        self.ended = true;

        let escrow = ctx.reattributed(self.address);
        let proceeds = self.highest_bid;
        if self.winner.is_some() && !proceeds.is_zero() {
            token.transfer(escrow, self.seller, proceeds)?;
        }

        for bidder in &self.bidders {
            let bid = &self.bids[bidder];
            let refund = if Some(*bidder) == self.winner {
                bid.deposit.saturating_sub(proceeds)
            } else {
                bid.deposit
            };
            if !refund.is_zero() {
                token.transfer(escrow, *bidder, refund)?;
            }
        }

        self.events.record(AuctionEvent::Ended { winner: self.winner, amount: proceeds });
        info!(auction = %self.address, winner = ?self.winner, %proceeds, "auction settled");
        Ok(proceeds)
    }

    /// The phase the auction is in at `timestamp`.
    pub const fn phase_at(&self, timestamp: u64) -> AuctionPhase {
        self.clock.phase_at(timestamp)
    }

    /// The sealed bid of `bidder`, if one was submitted.
    pub fn bid(&self, bidder: Address) -> Option<&SealedBid> {
        self.bids.get(&bidder)
    }

    /// Bidders in commit order.
    pub fn bidders(&self) -> &[Address] {
        &self.bidders
    }

    /// The address this instance is deployed at.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The account paid the winning bid.
    pub const fn seller(&self) -> Address {
        self.seller
    }

    /// The ledger deposits are escrowed on.
    pub const fn token(&self) -> Address {
        self.token
    }

    /// The smallest acceptable deposit.
    pub const fn min_bid(&self) -> U256 {
        self.min_bid
    }

    /// Unix seconds at which bidding closes.
    pub const fn deadline(&self) -> u64 {
        self.clock.deadline()
    }

    /// Unix seconds at which the reveal window closes.
    pub const fn reveal_deadline(&self) -> u64 {
        self.clock.reveal_deadline()
    }

    /// The highest value opened so far.
    pub const fn highest_bid(&self) -> U256 {
        self.highest_bid
    }

    /// The account that opened the highest value.
    pub const fn winner(&self) -> Option<Address> {
        self.winner
    }

    /// True once settlement has run.
    pub const fn has_ended(&self) -> bool {
        self.ended
    }

    /// Borrow the journal of emitted events.
    pub const fn events(&self) -> &EventJournal<AuctionEvent> {
        &self.events
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::REVEAL_PERIOD;
    use campus_token::TokenMetadata;

    const START: u64 = 1_700_000_000;
    const DURATION: u64 = 300;

    struct Rig {
        token: Token,
        auction: SealedBidAuction,
        seller: Address,
        alice: Address,
        bob: Address,
    }

    fn rig() -> Rig {
        let seller = Address::with_last_byte(1);
        let alice = Address::with_last_byte(2);
        let bob = Address::with_last_byte(3);

        let mut token = Token::deploy(
            Address::repeat_byte(0xaa),
            TokenMetadata::new("MyToken", "MTK", 18),
            U256::from(1_000_000u64),
            seller,
        );
        for bidder in [alice, bob] {
            token.transfer(CallContext::new(seller), bidder, U256::from(10_000u64)).unwrap();
        }

        let auction = SealedBidAuction::deploy(
            Address::repeat_byte(0xee),
            CallContext::new(seller).at(START),
            token.address(),
            U256::from(100u64),
            DURATION,
        );
        Rig { token, auction, seller, alice, bob }
    }

    fn commit(rig: &mut Rig, bidder: Address, value: u64, secret: &str, deposit: u64) {
        let ctx = CallContext::new(bidder).at(START);
        rig.token.approve(ctx, rig.auction.address(), U256::from(deposit)).unwrap();
        rig.auction
            .submit_bid(ctx, &mut rig.token, seal_bid(U256::from(value), secret), U256::from(deposit))
            .unwrap();
    }

    fn reveal_at() -> u64 {
        START + DURATION + 1
    }

    fn settle_at() -> u64 {
        START + DURATION + REVEAL_PERIOD + 1
    }

    #[test]
    fn sealed_bids_escrow_their_deposit() {
        let mut rig = rig();
        let alice = rig.alice;
        commit(&mut rig, alice, 200, "a", 500);

        assert_eq!(rig.token.balance_of(rig.auction.address()), U256::from(500u64));
        let bid = rig.auction.bid(rig.alice).unwrap();
        assert_eq!(bid.deposit(), U256::from(500u64));
        assert_eq!(bid.revealed(), None);
        assert_eq!(rig.auction.bidders(), &[rig.alice]);
        assert_eq!(
            rig.auction.events().last(),
            Some(&AuctionEvent::BidSubmitted { bidder: rig.alice, deposit: U256::from(500u64) })
        );
    }

    #[test]
    fn bidding_guards() {
        let mut rig = rig();
        let seal = seal_bid(U256::from(200u64), "a");

        let late = CallContext::new(rig.alice).at(START + DURATION + 1);
        let err = rig.auction.submit_bid(late, &mut rig.token, seal, U256::from(500u64));
        assert_eq!(err.unwrap_err().to_string(), "bidding is closed");

        let ctx = CallContext::new(rig.alice).at(START);
        let err = rig.auction.submit_bid(ctx, &mut rig.token, seal, U256::from(99u64));
        assert_eq!(err.unwrap_err().to_string(), "deposit below minimum bid");

        let err = rig.auction.submit_bid(ctx, &mut rig.token, seal, U256::from(500u64));
        assert_eq!(err.unwrap_err().to_string(), "Allowance exceeded");

        let alice = rig.alice;
        commit(&mut rig, alice, 200, "a", 500);
        rig.token.approve(ctx, rig.auction.address(), U256::from(500u64)).unwrap();
        let err = rig.auction.submit_bid(ctx, &mut rig.token, seal, U256::from(500u64));
        assert_eq!(err.unwrap_err().to_string(), "bid already submitted");
    }

    #[test]
    fn reveal_opens_the_commitment() {
        let mut rig = rig();
        let alice = rig.alice;
        commit(&mut rig, alice, 200, "a", 500);

        let early = CallContext::new(rig.alice).at(START + DURATION);
        let err = rig.auction.reveal_bid(early, U256::from(200u64), "a").unwrap_err();
        assert_eq!(err.to_string(), "bidding still open");

        let ctx = CallContext::new(rig.alice).at(reveal_at());
        let err = rig.auction.reveal_bid(ctx, U256::from(200u64), "wrong").unwrap_err();
        assert_eq!(err.to_string(), "revealed bid does not match commitment");

        let stranger = CallContext::new(rig.bob).at(reveal_at());
        let err = rig.auction.reveal_bid(stranger, U256::from(200u64), "a").unwrap_err();
        assert_eq!(err.to_string(), "no sealed bid for this bidder");

        rig.auction.reveal_bid(ctx, U256::from(200u64), "a").unwrap();
        assert_eq!(rig.auction.bid(rig.alice).unwrap().revealed(), Some(U256::from(200u64)));
        assert_eq!(rig.auction.highest_bid(), U256::from(200u64));
        assert_eq!(rig.auction.winner(), Some(rig.alice));

        let err = rig.auction.reveal_bid(ctx, U256::from(200u64), "a").unwrap_err();
        assert_eq!(err.to_string(), "bid already revealed");

        let late = CallContext::new(rig.alice).at(settle_at());
        let err = rig.auction.reveal_bid(late, U256::from(200u64), "a").unwrap_err();
        assert_eq!(err.to_string(), "reveal is closed");
    }

    #[test]
    fn reveals_cannot_outbid_their_deposit() {
        let mut rig = rig();
        let alice = rig.alice;
        commit(&mut rig, alice, 600, "a", 500);

        let ctx = CallContext::new(rig.alice).at(reveal_at());
        let err = rig.auction.reveal_bid(ctx, U256::from(600u64), "a").unwrap_err();
        assert_eq!(err.to_string(), "revealed bid exceeds deposit");
        assert_eq!(rig.auction.winner(), None);
    }

    #[test]
    fn the_first_of_equal_reveals_stays_ahead() {
        let mut rig = rig();
        let (alice, bob) = (rig.alice, rig.bob);
        commit(&mut rig, alice, 300, "a", 300);
        commit(&mut rig, bob, 300, "b", 400);

        rig.auction
            .reveal_bid(CallContext::new(rig.alice).at(reveal_at()), U256::from(300u64), "a")
            .unwrap();
        rig.auction
            .reveal_bid(CallContext::new(rig.bob).at(reveal_at()), U256::from(300u64), "b")
            .unwrap();

        assert_eq!(rig.auction.winner(), Some(rig.alice));
        assert_eq!(rig.auction.highest_bid(), U256::from(300u64));
    }

    #[test]
    fn settlement_pays_the_seller_and_refunds_the_rest() {
        let mut rig = rig();
        let (alice, bob) = (rig.alice, rig.bob);
        commit(&mut rig, alice, 200, "a", 500);
        commit(&mut rig, bob, 350, "b", 400);
        rig.auction
            .reveal_bid(CallContext::new(rig.alice).at(reveal_at()), U256::from(200u64), "a")
            .unwrap();
        rig.auction
            .reveal_bid(CallContext::new(rig.bob).at(reveal_at()), U256::from(350u64), "b")
            .unwrap();

        let seller_before = rig.token.balance_of(rig.seller);
        let ctx = CallContext::new(rig.seller).at(settle_at());
        let proceeds = rig.auction.end_auction(ctx, &mut rig.token).unwrap();

        assert_eq!(proceeds, U256::from(350u64));
        assert_eq!(rig.token.balance_of(rig.seller), seller_before + U256::from(350u64));
        assert_eq!(rig.token.balance_of(rig.alice), U256::from(10_000u64));
        assert_eq!(rig.token.balance_of(rig.bob), U256::from(10_000u64) - U256::from(350u64));
        assert_eq!(rig.token.balance_of(rig.auction.address()), U256::ZERO);
        assert!(rig.auction.has_ended());
        assert_eq!(
            rig.auction.events().last(),
            Some(&AuctionEvent::Ended { winner: Some(rig.bob), amount: U256::from(350u64) })
        );
    }

    #[test]
    fn settlement_guards() {
        let mut rig = rig();
        let alice = rig.alice;
        commit(&mut rig, alice, 200, "a", 500);

        let reveal_window = CallContext::new(rig.seller).at(START + DURATION + REVEAL_PERIOD);
        let err = rig.auction.end_auction(reveal_window, &mut rig.token).unwrap_err();
        assert_eq!(err.to_string(), "reveal period not over");

        let ctx = CallContext::new(rig.seller).at(settle_at());
        rig.auction.end_auction(ctx, &mut rig.token).unwrap();
        let err = rig.auction.end_auction(ctx, &mut rig.token).unwrap_err();
        assert_eq!(err.to_string(), "auction already ended");
    }

    #[test]
    fn an_auction_nobody_reveals_refunds_everyone() {
        let mut rig = rig();
        let (alice, bob) = (rig.alice, rig.bob);
        commit(&mut rig, alice, 200, "a", 500);
        commit(&mut rig, bob, 350, "b", 400);

        let seller_before = rig.token.balance_of(rig.seller);
        let ctx = CallContext::new(rig.seller).at(settle_at());
        let proceeds = rig.auction.end_auction(ctx, &mut rig.token).unwrap();

        assert_eq!(proceeds, U256::ZERO);
        assert_eq!(rig.token.balance_of(rig.seller), seller_before);
        assert_eq!(rig.token.balance_of(rig.alice), U256::from(10_000u64));
        assert_eq!(rig.token.balance_of(rig.bob), U256::from(10_000u64));
        assert_eq!(rig.token.balance_of(rig.auction.address()), U256::ZERO);
        assert_eq!(
            rig.auction.events().last(),
            Some(&AuctionEvent::Ended { winner: None, amount: U256::ZERO })
        );
    }
}
