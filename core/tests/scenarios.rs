use std::collections::HashMap;

use pairmatch_core::*;

const DELAY: Millis = Timing::DEFAULT.reveal_delay_ms;

/// Groups the unmatched cards of a snapshot by symbol.
fn open_pairs(snapshot: &SessionSnapshot) -> Vec<(CardId, CardId)> {
    let mut by_symbol: HashMap<&SymbolKey, Vec<CardId>> = HashMap::new();
    for card in snapshot.cards.iter().filter(|card| !card.matched) {
        by_symbol.entry(&card.symbol).or_default().push(card.id);
    }
    let mut pairs: Vec<_> = by_symbol
        .values()
        .flat_map(|ids| ids.chunks_exact(2).map(|pair| (pair[0], pair[1])))
        .collect();
    pairs.sort_unstable();
    pairs
}

fn mismatched_pair(snapshot: &SessionSnapshot) -> (CardId, CardId) {
    let open: Vec<&Card> = snapshot.cards.iter().filter(|card| !card.matched).collect();
    let first = open[0];
    let second = open
        .iter()
        .find(|card| card.symbol != first.symbol)
        .expect("at least two symbols left");
    (first.id, second.id)
}

fn resolve(engine: &mut MatchEngine, (a, b): (CardId, CardId)) -> SessionSnapshot {
    engine.request_reveal(a).unwrap();
    let pending = engine.request_reveal(b).unwrap();
    assert_eq!(pending.phase, TurnPhase::Resolving);
    assert!(pending.card(a).unwrap().revealed && pending.card(b).unwrap().revealed);
    assert!(!pending.card(a).unwrap().matched && !pending.card(b).unwrap().matched);

    let resolved = engine.advance(DELAY);
    assert_eq!(resolved.validate(), Ok(()));
    resolved
}

#[test]
fn every_preset_deals_perfect_pairs() {
    for size in GridSize::PRESETS {
        let engine = MatchEngine::seeded(GameConfig::new_unchecked(size, PlayerCount::Solo), 3);
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.cards.len(), usize::from(size.total_cards()));
        assert_eq!(open_pairs(&snapshot).len(), usize::from(size.total_pairs()));
        assert_eq!(snapshot.validate(), Ok(()));
    }
}

#[test]
fn solo_match_then_mismatch() {
    let mut engine = MatchEngine::seeded(GameConfig::new(4, 1).unwrap(), 2024);
    let start = engine.snapshot();
    assert_eq!(start.total_pairs, 8);

    let pair = open_pairs(&start)[0];
    let matched = resolve(&mut engine, pair);
    assert!(matched.card(pair.0).unwrap().matched);
    assert!(matched.card(pair.1).unwrap().matched);
    assert_eq!(matched.matched_pairs, 1);
    assert_eq!(matched.score_of(PlayerIndex::FIRST), 1);

    let miss = mismatched_pair(&matched);
    let missed = resolve(&mut engine, miss);
    assert!(!missed.card(miss.0).unwrap().revealed);
    assert!(!missed.card(miss.1).unwrap().revealed);
    assert_eq!(missed.matched_pairs, 1);
    assert_eq!(missed.current_player, PlayerIndex::FIRST);
}

#[test]
fn duel_turn_passes_on_miss_and_second_player_scores() {
    let mut engine = MatchEngine::seeded(GameConfig::new(4, 2).unwrap(), 77);

    let miss = mismatched_pair(&engine.snapshot());
    let after_miss = resolve(&mut engine, miss);
    assert_eq!(after_miss.current_player, PlayerIndex::SECOND);

    let pair = open_pairs(&after_miss)[0];
    let after_match = resolve(&mut engine, pair);
    assert_eq!(after_match.scores, [0, 1]);
    assert_eq!(after_match.current_player, PlayerIndex::SECOND);
}

#[test]
fn full_clear_ends_exactly_on_last_pair() {
    let mut engine = MatchEngine::seeded(GameConfig::new(4, 1).unwrap(), 9);

    for found in 1..=8 {
        let pair = open_pairs(&engine.snapshot())[0];
        let snapshot = resolve(&mut engine, pair);
        assert_eq!(snapshot.matched_pairs, found);
        assert_eq!(snapshot.game_over, found == 8);
    }

    let over = engine.snapshot();
    assert_eq!(over.outcome, Some(GameOutcome::Cleared));
    for id in 0..16 {
        assert_eq!(engine.request_reveal(id).unwrap(), over);
    }
}

#[test]
fn wrapped_catalog_game_still_clears() {
    // 8x8 needs 32 pairs but the stock catalog has 24 symbols
    let mut engine = MatchEngine::seeded(GameConfig::new(8, 2).unwrap(), 5);

    while !engine.is_game_over() {
        let pair = open_pairs(&engine.snapshot())[0];
        resolve(&mut engine, pair);
    }

    let over = engine.snapshot();
    assert_eq!(over.matched_pairs, 32);
    assert_eq!(over.scores, [32, 0]);
    assert_eq!(over.outcome, Some(GameOutcome::Winner(PlayerIndex::FIRST)));
}

#[test]
fn custom_catalog_flows_into_the_deck() {
    let catalog = SymbolCatalog::new(["sun", "rain"]).unwrap();
    let generator = RandomDeckGenerator::from_seed(1).with_catalog(catalog);
    let engine = MatchEngine::new(GameConfig::new(2, 1).unwrap(), generator);

    let mut symbols: Vec<&str> = engine.cards().iter().map(|card| card.symbol.as_str()).collect();
    symbols.sort_unstable();

    assert_eq!(symbols, ["rain", "rain", "sun", "sun"]);
}
