use std::{fs, path::PathBuf};
use worm::{
    highscore::HighscoreStore,
    model::{Crash, GameState, Phase, TickOutcome, COLS, INITIAL_WORM, ROWS},
    util::{Dir, PointI16, Rand},
};

fn tmp_path(name: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!("worm_rules_{}_{}.txt", name, std::process::id()));
    let _ = fs::remove_file(&p);
    p
}

fn new_state(name: &str, seed: u64) -> GameState {
    let mut r = Rand::new();
    r.srand(seed);
    GameState::new(HighscoreStore::new(tmp_path(name)), r)
}

fn p(x: i16, y: i16) -> PointI16 {
    PointI16::new(x, y)
}

/// eat `n` apples placed straight ahead, then park the apple in a far corner
fn eat_ahead(s: &mut GameState, n: u32) {
    for _ in 0..n {
        let ahead = s.head().unwrap().step(s.pending_direction());
        s.set_apple(ahead);
        assert_eq!(s.tick(), TickOutcome::Ate);
    }
    s.set_apple(p(COLS - 1, ROWS - 1));
}

fn crash_into_top_wall(s: &mut GameState) {
    assert!(s.set_direction(Dir::Up));
    for _ in 0..ROWS {
        if let TickOutcome::Crashed(c) = s.tick() {
            assert_eq!(c, Crash::Wall);
            return;
        }
    }
    panic!("worm never reached the wall");
}

#[test]
fn one_tick_moves_worm_and_keeps_apple() {
    let mut s = new_state("move", 1);
    s.reset();
    s.set_apple(p(20, 20));
    assert_eq!(s.tick(), TickOutcome::Moved);
    assert_eq!(s.body(), &[p(6, 5), p(5, 5), p(4, 5)][..]);
    assert_eq!(s.apple(), p(20, 20));
    assert_eq!(s.score(), 0);
}

#[test]
fn eating_grows_by_restoring_tail() {
    let mut s = new_state("eat", 2);
    s.reset();
    s.set_apple(p(6, 5));
    assert_eq!(s.tick(), TickOutcome::Ate);
    assert_eq!(s.score(), 1);
    assert_eq!(s.body(), &[p(6, 5), p(5, 5), p(4, 5), p(3, 5)][..]);
    assert!(!s.body().contains(&s.apple()));
    assert!(s.apple().inside(COLS, ROWS));
}

#[test]
fn left_wall_ends_game() {
    let mut s = new_state("wall", 3);
    s.set_worm(&[p(0, 5), p(1, 5), p(2, 5)], Dir::Left);
    s.set_apple(p(10, 10));
    assert_eq!(s.tick(), TickOutcome::Crashed(Crash::Wall));
    assert_eq!(s.phase(), Phase::GameOver);
    assert_eq!(s.body(), &[p(0, 5), p(1, 5), p(2, 5)][..]);
    assert_eq!(s.apple(), p(10, 10));
}

#[test]
fn every_wall_is_a_crash() {
    let cases = [
        (p(COLS - 1, 3), p(COLS - 2, 3), Dir::Right),
        (p(4, 0), p(4, 1), Dir::Up),
        (p(4, ROWS - 1), p(4, ROWS - 2), Dir::Down),
    ];
    for (i, (head, neck, d)) in cases.into_iter().enumerate() {
        let mut s = new_state(&format!("walls{}", i), 4);
        s.set_worm(&[head, neck], d);
        s.set_apple(p(20, 15));
        assert_eq!(s.tick(), TickOutcome::Crashed(Crash::Wall));
    }
}

#[test]
fn self_hit_ends_game_once_without_mutation() {
    let mut s = new_state("selfhit", 5);
    let body = [p(5, 5), p(6, 5), p(6, 6), p(5, 6), p(4, 6)];
    s.set_worm(&body, Dir::Down);
    s.set_apple(p(30, 3));
    assert_eq!(s.tick(), TickOutcome::Crashed(Crash::SelfHit));
    assert_eq!(s.phase(), Phase::GameOver);
    for _ in 0..3 {
        assert_eq!(s.tick(), TickOutcome::Idle);
    }
    assert_eq!(s.body(), &body[..]);
    assert_eq!(s.apple(), p(30, 3));
}

#[test]
fn moving_onto_the_tail_cell_is_a_crash() {
    let mut s = new_state("tailchase", 8);
    let body = [p(5, 5), p(6, 5), p(6, 6), p(5, 6)];
    s.set_worm(&body, Dir::Left);
    s.set_apple(p(30, 3));
    assert!(s.set_direction(Dir::Down));
    // (5, 6) is the tail, checked before it moves away
    assert_eq!(s.tick(), TickOutcome::Crashed(Crash::SelfHit));
    assert_eq!(s.phase(), Phase::GameOver);
    assert_eq!(s.body(), &body[..]);
}

#[test]
fn apple_lands_on_the_last_free_cell() {
    let mut s = new_state("lastcell", 9);
    let free = p(COLS - 1, ROWS - 1);
    let apple = p(1, 0);
    let mut body = vec![p(0, 0)];
    for y in 0..ROWS {
        for x in 0..COLS {
            let c = p(x, y);
            if c != p(0, 0) && c != apple && c != free {
                body.push(c);
            }
        }
    }
    s.set_worm(&body, Dir::Right);
    s.set_apple(apple);
    assert_eq!(s.tick(), TickOutcome::Ate);
    assert_eq!(s.body().len(), (COLS as usize) * (ROWS as usize) - 1);
    assert_eq!(s.apple(), free);
}

#[test]
fn reverse_direction_always_rejected() {
    for d in [Dir::Up, Dir::Right, Dir::Down, Dir::Left] {
        let mut s = new_state("reverse", 6);
        let head = p(10, 10);
        s.set_worm(&[head, head.step(d.reverse())], d);
        assert!(!s.set_direction(d.reverse()));
        assert_eq!(s.pending_direction(), d);
        assert_eq!(s.direction(), d);
    }
}

#[test]
fn highscore_is_max_of_previous_and_score() {
    let path = tmp_path("max");
    fs::write(&path, "3\n").unwrap();

    let mut low = GameState::new(HighscoreStore::new(&path), Rand::new());
    assert_eq!(low.highscore(), 3);
    low.reset();
    eat_ahead(&mut low, 2);
    crash_into_top_wall(&mut low);
    assert_eq!(low.score(), 2);
    assert_eq!(low.highscore(), 3);
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "3");

    let mut high = GameState::new(HighscoreStore::new(&path), Rand::new());
    high.reset();
    eat_ahead(&mut high, 5);
    crash_into_top_wall(&mut high);
    assert_eq!(high.highscore(), 5);
    assert_eq!(fs::read_to_string(&path).unwrap(), "5\n");
    let _ = fs::remove_file(&path);
}

#[test]
fn restart_resets_run_but_keeps_highscore() {
    let mut s = new_state("restart", 7);
    s.reset();
    eat_ahead(&mut s, 4);
    crash_into_top_wall(&mut s);
    assert_eq!(s.phase(), Phase::GameOver);
    assert_eq!(s.highscore(), 4);

    s.reset();
    assert_eq!(s.phase(), Phase::Playing);
    assert_eq!(s.score(), 0);
    assert_eq!(s.body(), &INITIAL_WORM[..]);
    assert_eq!(s.direction(), Dir::Right);
    assert_eq!(s.highscore(), 4);
}

/// Greedy player chasing the apple, checks the per tick invariants until it dies
#[test]
fn invariants_hold_over_long_runs() {
    for seed in 0..8u64 {
        let mut s = new_state(&format!("long{}", seed), seed);
        s.reset();
        let mut eaten = 0;
        for _ in 0..2000 {
            let head = s.head().unwrap();
            let apple = s.apple();
            let want = if apple.x > head.x {
                Dir::Right
            } else if apple.x < head.x {
                Dir::Left
            } else if apple.y > head.y {
                Dir::Down
            } else {
                Dir::Up
            };
            if !s.set_direction(want) {
                let side = if apple.y > head.y { Dir::Down } else { Dir::Up };
                s.set_direction(side);
            }

            let before = s.body().len();
            let snapshot = s.body().to_vec();
            let out = s.tick();
            let after = s.body().len();
            match out {
                TickOutcome::Crashed(_) => {
                    assert_eq!(s.body(), &snapshot[..]);
                    break;
                }
                TickOutcome::Ate => {
                    eaten += 1;
                    assert_eq!(after, before + 1);
                }
                TickOutcome::Moved => assert_eq!(after, before),
                TickOutcome::Idle => panic!("idle while playing"),
            }
            assert!(!s.body().contains(&s.apple()));
            let mut seen = s.body().to_vec();
            seen.sort_by_key(|q| (q.x, q.y));
            seen.dedup();
            assert_eq!(seen.len(), after, "duplicate segment");
        }
        assert!(eaten > 0, "greedy player should eat at least once");
        assert_eq!(s.score(), eaten);
    }
}
