//! Shared fixtures for integration tests.
//!
//! A sixteen-square board with every kind of square. Jail sits at the
//! default jail position, so `GameConfig::default()` fits it.

#![allow(dead_code)]

use monopoly_engine::{
    BoardData, CardKind, DeckData, Game, GameConfig, GameState, LoadedDice, Player, PlayerId,
    Property, PropertyKind, PropertySet, SetId,
};

pub const GO: usize = 0;
pub const BROWN: [usize; 2] = [1, 3];
pub const CHEST: usize = 2;
pub const TAX: usize = 4;
pub const STATIONS: [usize; 2] = [5, 12];
pub const UTILITIES: [usize; 2] = [6, 11];
pub const ANGEL: usize = 7;
pub const CHANCE: usize = 8;
pub const LIGHT_BLUE: [usize; 2] = [7, 9];
pub const JAIL: usize = 10;
pub const GO_TO_JAIL: usize = 13;
pub const DARK_BLUE: [usize; 2] = [14, 15];
pub const MAYFAIR: usize = 15;
pub const BOARD_SIZE: usize = 16;

pub const P0: PlayerId = PlayerId::new(0);
pub const P1: PlayerId = PlayerId::new(1);
pub const P2: PlayerId = PlayerId::new(2);

fn residential(name: &str, set: u16, price: i64, rent: [i64; 6]) -> Property {
    Property::new(name, SetId(set)).with_price(price).with_rent(rent)
}

fn station(name: &str) -> Property {
    Property::new(name, SetId(2))
        .with_price(200)
        .with_rent([25, 50, 100, 200])
}

pub fn board_with_decks(chance: Vec<CardKind>, chest: Vec<CardKind>) -> BoardData {
    BoardData {
        squares: vec![
            Property::new("Go", SetId(0)),
            residential("Old Kent Road", 1, 60, [2, 10, 30, 90, 160, 250]),
            Property::new("Community Chest", SetId(0)),
            residential("Whitechapel Road", 1, 60, [4, 20, 60, 180, 320, 450]),
            Property::new("Income Tax", SetId(0)).with_price(200),
            station("Kings Cross"),
            Property::new("Electric Company", SetId(3)).with_price(150),
            residential("The Angel Islington", 4, 120, [8, 40, 100, 300, 450, 600]),
            Property::new("Chance", SetId(0)),
            residential("Pentonville Road", 4, 120, [8, 40, 100, 300, 450, 600]),
            Property::new("Jail", SetId(0)),
            Property::new("Water Works", SetId(3)).with_price(150),
            station("Marylebone"),
            Property::new("Go To Jail", SetId(0)),
            residential("Park Lane", 5, 350, [35, 175, 500, 1100, 1300, 1500]),
            residential("Mayfair", 5, 400, [50, 200, 600, 1400, 1700, 2000]),
        ],
        sets: vec![
            PropertySet::new(SetId(0), "none", PropertyKind::None),
            PropertySet::new(SetId(1), "brown", PropertyKind::Residential).with_building(50),
            PropertySet::new(SetId(2), "black", PropertyKind::Station),
            PropertySet::new(SetId(3), "white", PropertyKind::Utility),
            PropertySet::new(SetId(4), "light blue", PropertyKind::Residential).with_building(50),
            PropertySet::new(SetId(5), "dark blue", PropertyKind::Residential).with_building(200),
        ],
        decks: vec![
            DeckData {
                name: "Chance".to_string(),
                cards: chance,
            },
            DeckData {
                name: "Community Chest".to_string(),
                cards: chest,
            },
        ],
    }
}

pub fn board() -> BoardData {
    board_with_decks(
        vec![
            CardKind::AdvanceTo { position: GO },
            CardKind::GetOutOfJail,
        ],
        vec![CardKind::Collect { amount: 100 }, CardKind::Pay { amount: 50 }],
    )
}

/// Three players with default cash, decks in printed order.
pub fn state() -> GameState {
    state_with(board(), 3)
}

pub fn state_with(board: BoardData, players: usize) -> GameState {
    let cash = GameConfig::default().starting_cash;
    GameState::with_players(board, vec![Player::new(cash); players]).unwrap()
}

pub fn game(state: GameState, rolls: impl IntoIterator<Item = (u8, u8)>) -> Game<LoadedDice> {
    let config = GameConfig::default().with_players(state.player_count());
    Game::new(state, config, LoadedDice::new(rolls)).unwrap()
}

pub fn cash(game: &Game<LoadedDice>) -> Vec<i64> {
    use monopoly_engine::RulesEngine;
    game.state().players.iter().map(|(_, p)| p.cash).collect()
}
