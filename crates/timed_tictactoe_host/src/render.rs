//! Plain-text rendering of a session view.

use timed_tictactoe::{Player, Position, SessionView, Square};

/// Renders the full screen: status, board, scores, and jump list.
pub fn render(view: &SessionView) -> String {
    let mut out = String::new();
    out.push_str(&view.status_line());
    out.push('\n');
    out.push_str(&board(view));
    out.push('\n');
    out.push_str(&format!(
        "{}   Undos left: {}   Theme: {}\n",
        view.score_line(),
        view.undos_remaining,
        view.theme
    ));
    out.push_str("History:\n");
    for entry in &view.history {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.index, entry.label));
    }
    out
}

/// Board grid with empty cells shown by index and the winning line bracketed.
pub fn board(view: &SessionView) -> String {
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|pos| cell(view, *pos))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    let width = rows.first().map_or(0, String::len);
    let rule = "-".repeat(width);
    format!("{}\n", rows.join(&format!("\n{}\n", rule)))
}

fn cell(view: &SessionView, pos: Position) -> String {
    let glyph = match view.board.get(pos) {
        Square::Empty => pos.to_index().to_string(),
        Square::Occupied(Player::X) => "X".to_string(),
        Square::Occupied(Player::O) => "O".to_string(),
    };
    if view.is_winning_square(pos) {
        format!("[{}]", glyph)
    } else {
        format!(" {} ", glyph)
    }
}

/// Notice printed when a player's clock runs out.
pub fn timed_out(player: Player) -> String {
    format!("Time's up for {}!\n", player)
}

/// One-line clock notice for the last seconds of a turn.
pub fn countdown(player: Player, remaining: u32) -> String {
    format!("{}: {}s left\n", player, remaining)
}
