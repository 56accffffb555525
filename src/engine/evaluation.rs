// Position evaluation
// Returns a score on the pawn=1.0 scale, positive = good for the queried side
//
// The score blends a material + piece-square component with three derived
// heuristics (pawn structure, mobility, center-control pressure) weighted by
// the active personality profile. The blend is applied once per evaluation
// and only from the queried color's perspective; the opponent's judgment is
// not personality-colored inside the same call.

use super::piece_square_tables::pst_bonus;
use crate::game_repr::{Board, Color, Type};
use crate::personality::PersonalityWeights;

// Heuristic constants
const MOBILITY_PER_MOVE: f64 = 0.1;
const DOUBLED_PAWN_PENALTY: f64 = 0.5;
const ISOLATED_PAWN_PENALTY: f64 = 0.3;
const PASSED_PAWN_BONUS: f64 = 0.5;
const CENTER_SQUARES: [(usize, usize); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];
const CENTER_PRESSURE_SCALE: f64 = 0.05;
const UNCONTESTED_CENTER_BONUS: f64 = 0.3;

/// Material value of a piece kind
pub fn piece_value(piece_type: Type) -> f64 {
    match piece_type {
        Type::Pawn => 1.0,
        Type::Knight => 3.0,
        Type::Bishop => 3.0,
        Type::Rook => 5.0,
        Type::Queen => 9.0,
        Type::King => 0.0,
        Type::None => 0.0,
    }
}

/// Attacker weight used for center-control pressure. Bishops count slightly
/// above knights here, unlike the material table.
fn center_weight(piece_type: Type) -> f64 {
    match piece_type {
        Type::Pawn => 1.0,
        Type::Knight => 3.0,
        Type::Bishop => 3.3,
        Type::Rook => 5.0,
        Type::Queen => 9.0,
        Type::King => 0.0,
        Type::None => 0.0,
    }
}

/// 0.1 per legal move available to `color`
pub fn mobility_score(board: &Board, color: Color) -> f64 {
    MOBILITY_PER_MOVE * board.legal_moves(color).len() as f64
}

/// Doubled, isolated and passed pawn terms for `color`
pub fn pawn_structure_score(board: &Board, color: Color) -> f64 {
    let mut score = 0.0;
    let enemy = color.opposite();

    // Rows of this color's pawns, per file
    let mut files: [Vec<usize>; 8] = Default::default();
    for row in 0..8 {
        for col in 0..8 {
            let piece = board.piece_at(row, col);
            if piece.piece_type == Type::Pawn && piece.color == color {
                files[col].push(row);
            }
        }
    }

    for col in 0..8 {
        let pawns = &files[col];
        if pawns.is_empty() {
            continue;
        }

        if pawns.len() > 1 {
            score -= DOUBLED_PAWN_PENALTY * (pawns.len() - 1) as f64;
        }

        for &row in pawns {
            let is_isolated = ![col.wrapping_sub(1), col + 1]
                .iter()
                .any(|&adj| adj < 8 && !files[adj].is_empty());
            if is_isolated {
                score -= ISOLATED_PAWN_PENALTY;
            }

            // Passed: no enemy pawn on this or an adjacent file on any rank
            // strictly between the pawn and its promotion rank
            let span: Box<dyn Iterator<Item = usize>> = match color {
                Color::White => Box::new(1..row),
                Color::Black => Box::new(row + 1..7),
            };
            let mut blocked = false;
            for r in span {
                for adj in [col.wrapping_sub(1), col, col + 1] {
                    if adj < 8 {
                        let piece = board.piece_at(r, adj);
                        if piece.piece_type == Type::Pawn && piece.color == enemy {
                            blocked = true;
                        }
                    }
                }
            }
            if !blocked {
                score += PASSED_PAWN_BONUS;
            }
        }
    }

    score
}

/// Piece-weighted pressure balance over the four central squares.
///
/// Each square's attacker/defender split is turned into a percentage of
/// pressure, scaled 0.05 per point above or below 50, with a flat 0.3
/// bonus/penalty for squares only one side touches.
pub fn center_control_score(board: &Board, color: Color, enemy: Color) -> f64 {
    let mut score = 0.0;

    let attack_map = |c: Color| -> Vec<((usize, usize), Type)> {
        board
            .legal_moves(c)
            .into_iter()
            .map(|mv| (mv.to, board.piece_at(mv.from.0, mv.from.1).piece_type))
            .collect()
    };
    let my_moves = attack_map(color);
    let enemy_moves = attack_map(enemy);

    for square in CENTER_SQUARES {
        let pressure = |moves: &[((usize, usize), Type)]| -> f64 {
            moves
                .iter()
                .filter(|(to, _)| *to == square)
                .map(|(_, kind)| center_weight(*kind))
                .sum()
        };

        let atk_score = pressure(&my_moves);
        let def_score = pressure(&enemy_moves);

        let total_pressure = atk_score + def_score;
        if total_pressure > 0.0 {
            let percent = atk_score / total_pressure * 100.0;
            score += (percent - 50.0) * CENTER_PRESSURE_SCALE;
        }

        // One-sided control of a center square
        if def_score == 0.0 && atk_score > 0.0 {
            score += UNCONTESTED_CENTER_BONUS;
        } else if atk_score == 0.0 && def_score > 0.0 {
            score -= UNCONTESTED_CENTER_BONUS;
        }
    }

    score
}

/// Score the position from `color`'s perspective under a personality's
/// weight profile
pub fn evaluate(board: &Board, color: Color, weights: &PersonalityWeights) -> f64 {
    let (score, _) = evaluate_parts(board, color, weights);
    score
}

/// Diagnostic share of each evaluation component, as percentages of the
/// absolute contribution total, display-rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvalBreakdown {
    pub material: f64,
    pub positional: f64,
    pub structure: f64,
    pub mobility: f64,
    pub center: f64,
}

/// `evaluate` plus the percentage breakdown, for testing and observability
pub fn evaluate_with_breakdown(
    board: &Board,
    color: Color,
    weights: &PersonalityWeights,
) -> (f64, EvalBreakdown) {
    evaluate_parts(board, color, weights)
}

fn evaluate_parts(
    board: &Board,
    color: Color,
    weights: &PersonalityWeights,
) -> (f64, EvalBreakdown) {
    let enemy = color.opposite();
    let mut material = 0.0;
    let mut positional = 0.0;
    let mut score = 0.0;

    for row in 0..8 {
        for col in 0..8 {
            let piece = board.piece_at(row, col);
            if piece.is_none() {
                continue;
            }

            let value = piece_value(piece.piece_type);
            let bonus = pst_bonus(piece.piece_type, row, col, piece.color);

            let sign = if piece.color == color { 1.0 } else { -1.0 };
            material += sign * value;
            positional += sign * bonus;
            score += sign * (value + bonus);
        }
    }

    let structure = pawn_structure_score(board, color);
    let mobility = mobility_score(board, color);
    let center = center_control_score(board, color, enemy);

    score += weights.structure * structure + weights.mobility * mobility + weights.center * center;
    if let Some(risk_penalty) = weights.risk_penalty {
        score += risk_penalty * structure.abs();
    }

    let base_total =
        material.abs() + positional.abs() + structure.abs() + mobility.abs() + center.abs();
    let breakdown = EvalBreakdown {
        material: percentage(material.abs(), base_total),
        positional: percentage(positional.abs(), base_total),
        structure: percentage(structure.abs(), base_total),
        mobility: percentage(mobility.abs(), base_total),
        center: percentage(center.abs(), base_total),
    };

    (score, breakdown)
}

fn percentage(part: f64, total: f64) -> f64 {
    if part.min(total) == 0.0 {
        0.0
    } else {
        (part / total * 100.0 * 100.0).round() / 100.0
    }
}
