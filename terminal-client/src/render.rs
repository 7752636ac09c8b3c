use tictactoe_engine::Board;

const EMPTY_SYMBOL: char = '.';

/// Text board with 1-based row labels and a column header.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let width = size.to_string().len();
    let cells_len = size * width + size - 1;

    let header: Vec<String> = (1..=size).map(|col| format!("{:>width$}", col)).collect();
    let border = format!("{:width$} +{}+", "", "-".repeat(cells_len + 2));

    let mut lines = Vec::with_capacity(size + 3);
    lines.push(format!("{:width$}   {}", "", header.join(" ")));
    lines.push(border.clone());
    for (row, cells) in board.rows().iter().enumerate() {
        let symbols: Vec<String> = cells
            .iter()
            .map(|cell| {
                let symbol = cell.mark().map_or(EMPTY_SYMBOL, |mark| mark.symbol());
                format!("{:>width$}", symbol)
            })
            .collect();
        lines.push(format!("{:>width$} | {} |", row + 1, symbols.join(" ")));
    }
    lines.push(border);

    lines.join("\n")
}
