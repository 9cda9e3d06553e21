//! Auction tests: bidding order, closing, and settling.

mod common;

use common::*;
use monopoly_engine::{Action, Game, GameError, LoadedDice, Offer, RulesEngine};
use proptest::prelude::*;

fn bid(game: &mut Game<LoadedDice>, amount: i64) -> Offer {
    game.apply(&Action::Bid {
        amount: Some(amount),
    })
    .unwrap()
}

fn stay(game: &mut Game<LoadedDice>) -> Offer {
    game.apply(&Action::Stay).unwrap()
}

fn end_auction() -> Offer {
    Offer::one(Action::EndAuction)
}

// =============================================================================
// Selling a landed-on square
// =============================================================================

/// Declining to buy sends the square to auction; the winner buys it at
/// their bid and the turn goes back to the player who landed.
#[test]
fn test_auction_instead_of_buying() {
    let mut game = game(state(), []);
    game.apply(&Action::GoTo { position: MAYFAIR }).unwrap();

    let offer = game
        .apply(&Action::Auction {
            position: MAYFAIR,
            interrupt: false,
        })
        .unwrap();
    assert_eq!(offer, Offer::bid_or_stay());
    assert_eq!(game.state().player, P1);

    assert_eq!(bid(&mut game, 100), Offer::bid_or_stay());
    assert_eq!(stay(&mut game), Offer::bid_or_stay());
    assert_eq!(stay(&mut game), end_auction());
    assert_eq!(game.state().player, P1);

    let offer = game.apply(&Action::EndAuction).unwrap();
    assert!(offer.is(&Action::Buy {
        position: MAYFAIR,
        price: 100
    }));

    let offer = game.apply(&offer.actions()[0]).unwrap();

    assert!(offer.is(&Action::EndTurn));
    assert_eq!(game.state().player, P0);
    assert!(game.state().auction.is_none());
    assert_eq!(game.state().board[MAYFAIR].owner, Some(P1));
    assert_eq!(cash(&game), vec![1200, 1100, 1200]);
}

/// Nobody bidding leaves the square unsold.
#[test]
fn test_unsold_auction() {
    let mut game = game(state(), []);
    game.apply(&Action::Auction {
        position: STATIONS[0],
        interrupt: false,
    })
    .unwrap();

    stay(&mut game);
    stay(&mut game);
    assert_eq!(stay(&mut game), end_auction());
    assert!(game.state().auction().unwrap().is_unsold());

    let offer = game.apply(&Action::EndAuction).unwrap();

    assert!(offer.is(&Action::EndTurn));
    assert_eq!(game.state().player, P0);
    assert_eq!(game.state().board[STATIONS[0]].owner, None);
}

/// A bid that does not beat the highest is ignored and the bidder keeps
/// the turn.
#[test]
fn test_low_bid_changes_nothing() {
    let mut game = game(state(), []);
    game.apply(&Action::Auction {
        position: MAYFAIR,
        interrupt: false,
    })
    .unwrap();
    bid(&mut game, 50);

    assert_eq!(bid(&mut game, 50), Offer::bid_or_stay());
    assert_eq!(bid(&mut game, 10), Offer::bid_or_stay());

    let auction = game.state().auction().unwrap();
    assert_eq!(auction.amount, 50);
    assert_eq!(auction.highest_bidder, Some(P1));
    assert_eq!(game.state().player, P2);
}

/// Outbidding sends the bid round again.
#[test]
fn test_bidding_war() {
    let mut game = game(state(), []);
    game.apply(&Action::Auction {
        position: MAYFAIR,
        interrupt: false,
    })
    .unwrap();

    bid(&mut game, 100); // P1
    bid(&mut game, 150); // P2
    stay(&mut game); // P0
    bid(&mut game, 200); // P1
    stay(&mut game); // P2
    assert_eq!(stay(&mut game), end_auction()); // P0

    let auction = game.state().auction().unwrap();
    assert_eq!(auction.highest_bidder, Some(P1));
    assert_eq!(auction.amount, 200);
}

// =============================================================================
// Interrupting auctions
// =============================================================================

/// An owner auctioning a mortgaged square mid-turn: the winner may buy it
/// still mortgaged or lift the mortgage at the same time.
#[test]
fn test_mortgaged_square_settlement() {
    let mut state = state();
    state.board[MAYFAIR].owner = Some(P0);
    state.board[MAYFAIR].mortgaged = true;
    let mut game = game(state, []);
    let pending = game.apply(&Action::GoTo { position: JAIL }).unwrap();

    let offer = game
        .apply(&Action::Auction {
            position: MAYFAIR,
            interrupt: true,
        })
        .unwrap();
    assert_eq!(offer, Offer::bid_or_stay());

    bid(&mut game, 150);
    stay(&mut game);
    stay(&mut game);

    let offer = game.apply(&Action::EndAuction).unwrap();
    assert_eq!(
        offer,
        Offer::choice([
            Action::Buy {
                position: MAYFAIR,
                price: 150
            },
            Action::LiftMortgage {
                position: MAYFAIR,
                amount: 220
            }
        ])
    );

    let resumed = game
        .apply(&Action::LiftMortgage {
            position: MAYFAIR,
            amount: 220,
        })
        .unwrap();

    assert_eq!(resumed, pending);
    assert_eq!(game.state().player, P0);
    let property = &game.state().board[MAYFAIR];
    assert_eq!(property.owner, Some(P1));
    assert!(!property.mortgaged);
    assert!(!property.encumbered);
    assert_eq!(cash(&game), vec![1350, 830, 1200]);
}

/// Buying a mortgaged square without lifting it encumbers it.
#[test]
fn test_mortgaged_square_bought_as_is() {
    let mut state = state();
    state.board[MAYFAIR].owner = Some(P0);
    state.board[MAYFAIR].mortgaged = true;
    state.players[P1].cash = 300;
    let mut game = game(state, []);

    game.apply(&Action::Auction {
        position: MAYFAIR,
        interrupt: true,
    })
    .unwrap();
    bid(&mut game, 150);
    stay(&mut game);
    stay(&mut game);

    // 150 + 220 is more than P1 holds.
    let offer = game.apply(&Action::EndAuction).unwrap();
    assert!(offer.is(&Action::Buy {
        position: MAYFAIR,
        price: 150
    }));
    game.apply(&offer.actions()[0]).unwrap();

    let property = &game.state().board[MAYFAIR];
    assert_eq!(property.owner, Some(P1));
    assert!(property.mortgaged);
    assert!(property.encumbered);
}

/// An owner who outbids everyone keeps the square and pays nothing.
#[test]
fn test_owner_wins_own_auction() {
    let mut state = state();
    state.board[MAYFAIR].owner = Some(P0);
    let mut game = game(state, []);
    let pending = game.apply(&Action::GoTo { position: JAIL }).unwrap();

    game.apply(&Action::Auction {
        position: MAYFAIR,
        interrupt: true,
    })
    .unwrap();
    stay(&mut game); // P1
    stay(&mut game); // P2
    bid(&mut game, 100); // P0
    stay(&mut game); // P1
    assert_eq!(stay(&mut game), end_auction()); // P2

    let offer = game.apply(&Action::EndAuction).unwrap();

    assert_eq!(offer, pending);
    assert_eq!(game.state().board[MAYFAIR].owner, Some(P0));
    assert_eq!(cash(&game), vec![1200, 1200, 1200]);
}

// =============================================================================
// Misuse
// =============================================================================

/// Nothing else moves while an auction runs.
#[test]
fn test_turn_blocked_during_auction() {
    let mut game = game(state(), []);
    game.apply(&Action::Auction {
        position: MAYFAIR,
        interrupt: false,
    })
    .unwrap();

    assert!(matches!(
        game.apply(&Action::EndTurn),
        Err(GameError::AuctionInProgress)
    ));
    assert!(matches!(
        game.apply(&Action::Auction {
            position: STATIONS[0],
            interrupt: false
        }),
        Err(GameError::AuctionInProgress)
    ));
    assert!(matches!(
        game.apply(&Action::EndAuction),
        Err(GameError::AuctionOpen)
    ));
    for action in [
        Action::Roll,
        Action::GoTo { position: ANGEL },
        Action::Jump { position: ANGEL },
        Action::DrawCard,
        Action::GoToJail,
        Action::Buy {
            position: ANGEL,
            price: 120,
        },
    ] {
        assert!(
            matches!(game.apply(&action), Err(GameError::AuctionInProgress)),
            "{action} ran during an auction"
        );
    }
    assert_eq!(game.state().player, P1);
    assert_eq!(game.state().players[P1].position, GO);
    assert_eq!(game.state().board[ANGEL].owner, None);
    assert!(matches!(
        game.apply(&Action::Bid { amount: None }),
        Err(GameError::MissingBid)
    ));
}

/// Bidding with no auction running is an error.
#[test]
fn test_no_auction() {
    let mut game = game(state(), []);

    assert!(matches!(
        game.apply(&Action::Stay),
        Err(GameError::NoAuction)
    ));
    assert!(matches!(
        game.apply(&Action::Bid { amount: Some(10) }),
        Err(GameError::NoAuction)
    ));
}

/// Bids after the auction closes are answered with its end.
#[test]
fn test_closed_auction_takes_no_bids() {
    let mut game = game(state(), []);
    game.apply(&Action::Auction {
        position: MAYFAIR,
        interrupt: false,
    })
    .unwrap();
    bid(&mut game, 100);
    stay(&mut game);
    stay(&mut game);

    assert_eq!(bid(&mut game, 500), end_auction());
    assert_eq!(stay(&mut game), end_auction());
    assert_eq!(game.state().auction().unwrap().amount, 100);
}

proptest! {
    /// However the bidding goes, the auction closes after every other
    /// player stays in turn following the last raise (or, with no raise at
    /// all, once everyone has stayed), and the highest bid never drops.
    #[test]
    fn prop_auction_closes_after_a_full_round_of_stays(
        players in 2usize..=6,
        moves in proptest::collection::vec(any::<bool>(), 1..40)
    ) {
        let mut game = game(state_with(board(), players), []);
        game.apply(&Action::Auction { position: MAYFAIR, interrupt: false }).unwrap();

        let mut highest = 0;
        let mut raised = false;
        let mut stays = 0;
        for raise in moves {
            let offer = if raise {
                raised = true;
                stays = 0;
                highest += 10;
                bid(&mut game, highest)
            } else {
                stays += 1;
                stay(&mut game)
            };

            let needed = if raised { players - 1 } else { players };
            let should_close = stays == needed;
            let auction = game.state().auction().unwrap();

            prop_assert_eq!(auction.amount, highest);
            prop_assert_eq!(auction.closed, should_close);
            prop_assert_eq!(offer == end_auction(), should_close);
            if should_close {
                break;
            }
        }
    }

    /// Every player gets exactly one chance per round, starting after the
    /// player who opened the auction.
    #[test]
    fn prop_bidding_order(players in 2usize..=8) {
        let mut game = game(state_with(board(), players), []);
        game.apply(&Action::Auction { position: MAYFAIR, interrupt: false }).unwrap();

        let mut seen = Vec::new();
        for _ in 0..players {
            seen.push(game.state().player.index());
            stay(&mut game);
        }

        let expected: Vec<_> = (1..players).chain([0]).collect();
        prop_assert_eq!(seen, expected);
        prop_assert!(game.state().auction().unwrap().is_unsold());
    }
}
