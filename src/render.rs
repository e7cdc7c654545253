//! Draw command generation
//!
//! Pure function of game state to an ordered list of drawing commands. The
//! crate never touches a real surface; the UI layer replays the list on
//! whatever backend it has (canvas, GPU quad batch, terminal cells).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::GameState;

/// Background fill, `#111`
pub const COLOR_BACKGROUND: [f32; 4] = [0.067, 0.067, 0.067, 1.0];
/// Net dashes, `#555`
pub const COLOR_NET: [f32; 4] = [0.333, 0.333, 0.333, 1.0];
/// Paddles, ball and score numerals, `#fff`
pub const COLOR_FOREGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Net dash layout: a 4x24 dash every 36 units down the center line
const NET_DASH_SPACING: f32 = 36.0;
const NET_DASH_SIZE: Vec2 = Vec2::new(4.0, 24.0);

/// Score numeral size and baseline height
const SCORE_TEXT_SIZE: f32 = 48.0;
const SCORE_TEXT_Y: f32 = 60.0;

/// One drawing primitive, in paint order within the frame's command list.
///
/// `Rect` and `Text` positions follow the field's convention: `pos` is the
/// rectangle's top-left corner, text is centered horizontally on `pos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear {
        color: [f32; 4],
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: [f32; 4],
    },
}

/// Render the current state as a command list.
///
/// Paint order: clear, net, paddles, ball, scores. Valid for any state,
/// including one that has never been ticked.
pub fn render(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(20);

    commands.push(DrawCommand::Clear {
        color: COLOR_BACKGROUND,
    });

    // Dashed center net
    let mut y = 0.0;
    while y < FIELD_HEIGHT {
        commands.push(DrawCommand::Rect {
            pos: Vec2::new(FIELD_WIDTH / 2.0 - NET_DASH_SIZE.x / 2.0, y),
            size: NET_DASH_SIZE,
            color: COLOR_NET,
        });
        y += NET_DASH_SPACING;
    }

    // Paddles
    let paddle_size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
    commands.push(DrawCommand::Rect {
        pos: Vec2::new(PLAYER_X, state.player.y),
        size: paddle_size,
        color: COLOR_FOREGROUND,
    });
    commands.push(DrawCommand::Rect {
        pos: Vec2::new(OPPONENT_X, state.opponent.y),
        size: paddle_size,
        color: COLOR_FOREGROUND,
    });

    // Ball
    commands.push(DrawCommand::Circle {
        center: state.ball.pos,
        radius: state.ball.radius,
        color: COLOR_FOREGROUND,
    });

    // Scores at the quarter marks
    commands.push(DrawCommand::Text {
        text: state.player_score.to_string(),
        pos: Vec2::new(FIELD_WIDTH / 4.0, SCORE_TEXT_Y),
        size: SCORE_TEXT_SIZE,
        color: COLOR_FOREGROUND,
    });
    commands.push(DrawCommand::Text {
        text: state.opponent_score.to_string(),
        pos: Vec2::new(3.0 * FIELD_WIDTH / 4.0, SCORE_TEXT_Y),
        size: SCORE_TEXT_SIZE,
        color: COLOR_FOREGROUND,
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceSource;
    use crate::tuning::Difficulty;

    fn fresh_state() -> GameState {
        let mut rng = SequenceSource::new(vec![0.9, 0.5]);
        GameState::new(&Difficulty::Medium.profile(), &mut rng)
    }

    #[test]
    fn test_paint_order_and_counts() {
        let commands = render(&fresh_state());

        assert!(matches!(commands[0], DrawCommand::Clear { .. }));

        // 14 net dashes: every 36 units over a 500-unit field
        let dashes = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { color, .. } if *color == COLOR_NET))
            .count();
        assert_eq!(dashes, 14);

        let paddles = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { color, .. } if *color == COLOR_FOREGROUND))
            .count();
        assert_eq!(paddles, 2);

        let balls = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(balls, 1);

        // Ball is painted after the net and paddles, before the scores
        let circle_idx = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Circle { .. }))
            .unwrap();
        let first_text_idx = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Text { .. }))
            .unwrap();
        assert!(circle_idx < first_text_idx);
    }

    #[test]
    fn test_scores_at_quarter_marks() {
        let mut state = fresh_state();
        state.player_score = 3;
        state.opponent_score = 11;

        let commands = render(&state);
        let texts: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, pos, size, .. } => Some((text.clone(), *pos, *size)),
                _ => None,
            })
            .collect();

        assert_eq!(
            texts,
            vec![
                ("3".to_string(), Vec2::new(200.0, 60.0), 48.0),
                ("11".to_string(), Vec2::new(600.0, 60.0), 48.0),
            ]
        );
    }

    #[test]
    fn test_net_centered_on_field() {
        let commands = render(&fresh_state());
        for c in &commands {
            if let DrawCommand::Rect { pos, size, color } = c {
                if *color == COLOR_NET {
                    assert_eq!(pos.x, 398.0);
                    assert_eq!(*size, Vec2::new(4.0, 24.0));
                }
            }
        }
    }

    #[test]
    fn test_commands_serialize() {
        // The UI layer may ship these across a boundary; they must be plain
        // data end to end.
        let commands = render(&fresh_state());
        let json = serde_json::to_string(&commands).unwrap();
        let back: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(commands, back);
    }
}
