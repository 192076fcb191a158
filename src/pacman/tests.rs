use super::*;
use crate::search::{GameState, IllegalActionError};

const CORRIDOR: &str = "
%%%%%%%
%P.G  %
%%%%%%%
";

const CAPSULE_CORRIDOR: &str = "
%%%%%%
%Po G%
%.%%%%
%%%%%%
";

fn state(text: &str) -> PacmanState {
    PacmanState::new(&Layout::parse(text).unwrap())
}

#[test]
fn test_parse_layout() {
    let layout = Layout::parse(CAPSULE_CORRIDOR).unwrap();

    assert_eq!(layout.width(), 6);
    assert_eq!(layout.height(), 4);
    assert_eq!(layout.pacman_start(), Position::new(1, 1));
    assert_eq!(layout.ghost_starts(), &[Position::new(4, 1)]);
    assert_eq!(layout.capsules(), &[Position::new(2, 1)]);
    assert_eq!(layout.food().as_list(), vec![Position::new(1, 2)]);
    assert!(layout.walls().is_set(Position::new(0, 0)));
    assert!(!layout.walls().is_set(Position::new(3, 1)));
}

#[test]
fn test_parse_layout_errors() {
    assert!(matches!(Layout::parse("\n\n"), Err(LayoutError::EmptyLayout)));
    assert!(matches!(
        Layout::parse("%%%%\n%P%\n%%%%"),
        Err(LayoutError::RaggedRow {
            row: 1,
            expected: 4,
            found: 3
        })
    ));
    assert!(matches!(
        Layout::parse("%%%\n%P#\n%%%"),
        Err(LayoutError::UnknownCharacter {
            character: '#',
            x: 2,
            y: 1
        })
    ));
    assert!(matches!(
        Layout::parse("%%%\n%.%\n%%%"),
        Err(LayoutError::MissingPacman)
    ));
    assert!(matches!(
        Layout::parse("%%%%\n%PP%\n%%%%"),
        Err(LayoutError::DuplicatePacman)
    ));
}

#[test]
fn test_parse_layout_keeps_open_edges_and_blank_rows() {
    let layout = Layout::parse("%%%%\n%P. \n%%%%\n").unwrap();
    assert_eq!((layout.width(), layout.height()), (4, 3));
    assert!(!layout.walls().is_set(Position::new(3, 1)));

    let state = PacmanState::new(&Layout::parse("%%%%\n%P  \n%.%%\n").unwrap());
    let state = state.pacman_successor(Direction::East).unwrap();
    let state = state.pacman_successor(Direction::East).unwrap();
    assert_eq!(state.pacman_position(), Position::new(3, 1));
    assert_eq!(state.legal_actions(0).as_slice(), &[Direction::West, Direction::Stop]);

    let layout = Layout::parse("\r\nP. \r\n   \r\n.  \r\n\r\n").unwrap();
    assert_eq!((layout.width(), layout.height()), (3, 3));
    assert_eq!(
        layout.food().as_list(),
        vec![Position::new(1, 0), Position::new(0, 2)]
    );
}

#[test]
fn test_builtin_layouts_parse() {
    for name in layouts::builtin_names() {
        let layout = Layout::load(name).unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert!(layout.food().count() > 0, "{} has no food", name);
        assert!(layout.num_ghosts() > 0, "{} has no ghosts", name);
    }
}

#[test]
fn test_load_layout_file_and_unknown_name() {
    let path = std::env::temp_dir().join(format!("multiagent-layout-{}.lay", std::process::id()));
    std::fs::write(&path, CORRIDOR).unwrap();

    let layout = Layout::load(path.to_str().unwrap()).unwrap();
    assert_eq!(layout.num_ghosts(), 1);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        Layout::load("noSuchLayout"),
        Err(LayoutError::UnknownLayout(_))
    ));
}

#[test]
fn test_with_max_ghosts() {
    let layout = Layout::load("minimaxClassic").unwrap();
    assert_eq!(layout.num_ghosts(), 3);
    let layout = layout.with_max_ghosts(1);
    assert_eq!(layout.num_ghosts(), 1);
    assert_eq!(PacmanState::new(&layout).num_agents(), 2);
}

#[test]
fn test_pacman_legal_actions_follow_listing_order() {
    let state = state(CORRIDOR);
    let actions: Vec<Direction> = state.legal_actions(0).into_iter().collect();
    assert_eq!(actions, vec![Direction::East, Direction::Stop]);
}

#[test]
fn test_ghosts_cannot_stop_or_reverse_unless_forced() {
    let state = state(CORRIDOR);
    assert_eq!(
        state.legal_actions(1).as_slice(),
        &[Direction::East, Direction::West]
    );

    let state = state.generate_successor(1, &Direction::East).unwrap();
    assert_eq!(state.legal_actions(1).as_slice(), &[Direction::East]);

    let state = state.generate_successor(1, &Direction::East).unwrap();
    assert_eq!(state.ghost_positions(), vec![Position::new(5, 1)]);
    assert_eq!(state.legal_actions(1).as_slice(), &[Direction::West]);
}

#[test]
fn test_eating_food_scores_and_last_food_wins() {
    let state = state("
%%%%%%
%P..G%
%%%%%%
");
    let state = state.pacman_successor(Direction::East).unwrap();
    assert_eq!(state.score(), FOOD_SCORE - TIME_PENALTY);
    assert_eq!(state.num_food(), 1);
    assert!(!state.is_terminal());

    let state = state.pacman_successor(Direction::East).unwrap();
    assert!(state.is_win());
    assert_eq!(state.score(), 2.0 * (FOOD_SCORE - TIME_PENALTY) + WIN_SCORE);
    assert_eq!(
        state.pacman_successor(Direction::West),
        Err(IllegalActionError::GameOver)
    );
    assert!(!state.legal_actions(0).is_empty());
}

#[test]
fn test_running_into_a_ghost_loses() {
    let state = state("
%%%%%%
%.P G%
%%%%%%
");
    let state = state.pacman_successor(Direction::East).unwrap();
    let state = state.generate_successor(1, &Direction::West).unwrap();

    assert!(state.is_lose());
    assert_eq!(state.score(), -TIME_PENALTY - LOSE_PENALTY);
}

#[test]
fn test_capsule_scares_ghosts_and_scared_ghosts_can_be_eaten() {
    let state = state(CAPSULE_CORRIDOR);

    let state = state.pacman_successor(Direction::East).unwrap();
    assert!(state.capsules().is_empty());
    assert_eq!(state.ghost_states()[0].scared_timer(), SCARED_TIME);

    let state = state.generate_successor(1, &Direction::West).unwrap();
    assert_eq!(state.ghost_states()[0].scared_timer(), SCARED_TIME - 1);

    let state = state.pacman_successor(Direction::East).unwrap();
    assert!(!state.is_terminal());
    assert_eq!(state.score(), -2.0 * TIME_PENALTY + GHOST_EATEN_SCORE);
    let ghost = state.ghost_states()[0];
    assert_eq!(ghost.position(), ghost.start());
    assert!(!ghost.is_scared());
}

#[test]
fn test_illegal_actions_are_rejected() {
    let state = state(CORRIDOR);
    assert_eq!(
        state.pacman_successor(Direction::North),
        Err(IllegalActionError::NotLegal {
            agent: 0,
            action: "North".to_string()
        })
    );
    assert_eq!(
        state.generate_successor(1, &Direction::Stop),
        Err(IllegalActionError::NotLegal {
            agent: 1,
            action: "Stop".to_string()
        })
    );
    assert_eq!(
        state.generate_successor(2, &Direction::East),
        Err(IllegalActionError::UnknownAgent(2))
    );
}

#[test]
fn test_display_renders_grid_and_score() {
    let state = state(CORRIDOR);
    let rendered = state.to_string();
    assert_eq!(rendered, "%%%%%%%\n%P.G  %\n%%%%%%%\nScore: 0");

    let state = state.pacman_successor(Direction::East).unwrap();
    assert!(state.to_string().starts_with("%%%%%%%\n% <G  %\n"));
}

#[test]
fn test_direction_parsing_and_geometry() {
    assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
    assert_eq!("W".parse::<Direction>().unwrap(), Direction::West);
    assert!("up".parse::<Direction>().is_err());
    for direction in ALL_DIRECTIONS {
        assert_eq!(direction.reverse().reverse(), direction);
    }

    let origin = Position::new(0, 0);
    assert_eq!(origin.step(Direction::West), None);
    assert_eq!(origin.step(Direction::South), Some(Position::new(0, 1)));
    assert_eq!(
        Position::new(1, 4).manhattan_distance(Position::new(3, 1)),
        5
    );
}
