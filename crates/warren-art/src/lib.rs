//! Built-in ASCII frames for the warren scene player.
//!
//! Frames are stored as row arrays and joined on demand. Everything here is
//! precomputed text; nothing is converted at runtime.

mod bunny;
mod ground;
mod trees;

use warren_core::{CoreError, Direction, Frame, FrameSet};

pub use bunny::BUNNY_LEFT;
pub use ground::GROUND_TILE;
pub use trees::{TREE_CLOSE, TREE_FAR, TREE_MEDIUM};

/// Columns of empty ground between trees in the forest strip.
const FOREST_GAP: usize = 6;

/// Join one frame's rows into a frame.
pub fn join_rows(rows: &[&str]) -> Frame {
    Frame::new(rows.join("\n"))
}

/// Join every frame in a row-array table.
pub fn frames(table: &[&[&str]]) -> Vec<Frame> {
    table.iter().map(|rows| join_rows(rows)).collect()
}

/// Mirror a frame horizontally, swapping characters that have a handedness.
pub fn mirror(frame: &Frame) -> Frame {
    let width = frame.width();
    let rows: Vec<String> = frame
        .lines()
        .map(|line| {
            let pad = width - line.chars().count();
            let mirrored: String = line.chars().rev().map(mirror_char).collect();
            let padded = format!("{}{}", " ".repeat(pad), mirrored);
            padded.trim_end().to_string()
        })
        .collect();
    Frame::new(rows.join("\n"))
}

fn mirror_char(ch: char) -> char {
    match ch {
        '/' => '\\',
        '\\' => '/',
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        other => other,
    }
}

/// The bunny hop cycle, facing the way the forest scrolls past.
///
/// A forward scroll moves the forest left, so the bunny faces right.
pub fn bunny(direction: Direction) -> Result<FrameSet, CoreError> {
    let left = frames(BUNNY_LEFT);
    match direction {
        Direction::Reverse => FrameSet::labelled("hop left", left),
        Direction::Forward => FrameSet::labelled("hop right", left.iter().map(mirror)),
    }
}

/// Zoom sequence for a single tree: far, medium, close, medium.
pub fn tree_zoom() -> Result<Vec<FrameSet>, CoreError> {
    Ok(vec![
        FrameSet::labelled("far", frames(TREE_FAR))?,
        FrameSet::labelled("medium", frames(TREE_MEDIUM))?,
        FrameSet::labelled("close", frames(TREE_CLOSE))?,
        FrameSet::labelled("medium", frames(TREE_MEDIUM))?,
    ])
}

/// A strip of swaying trees for the scrolling background.
///
/// Each frame places trees of mixed sizes side by side, bottom-aligned, with
/// their sway phases staggered so the strip never moves in lockstep.
pub fn forest() -> Result<FrameSet, CoreError> {
    let steps = TREE_FAR.len();
    let strip = (0..steps).map(|step| {
        let trees: [&[&str]; 5] = [
            TREE_MEDIUM[step % steps],
            TREE_CLOSE[(step + 1) % steps],
            TREE_FAR[(step + 2) % steps],
            TREE_MEDIUM[(step + 3) % steps],
            TREE_FAR[step % steps],
        ];
        side_by_side(&trees, FOREST_GAP)
    });
    FrameSet::labelled("forest", strip)
}

/// The ground strip, repeated out to exactly `width` columns so it can tile
/// at the same pitch as the forest above it.
pub fn ground(width: usize) -> Frame {
    let rows: Vec<String> = GROUND_TILE
        .iter()
        .map(|row| row.chars().cycle().take(width).collect())
        .collect();
    Frame::new(rows.join("\n"))
}

/// Place row arrays next to each other, aligned on their bottom rows.
fn side_by_side(parts: &[&[&str]], gap: usize) -> Frame {
    let height = parts.iter().map(|p| p.len()).max().unwrap_or(0);
    let widths: Vec<usize> = parts
        .iter()
        .map(|p| p.iter().map(|r| r.chars().count()).max().unwrap_or(0))
        .collect();

    let rows: Vec<String> = (0..height)
        .map(|y| {
            let mut row = String::new();
            for (part, &width) in parts.iter().zip(&widths) {
                let top = height - part.len();
                let cell = if y >= top { part[y - top] } else { "" };
                row.push_str(cell);
                row.push_str(&" ".repeat(width - cell.chars().count() + gap));
            }
            row.trim_end().to_string()
        })
        .collect();

    Frame::new(rows.join("\n"))
}
