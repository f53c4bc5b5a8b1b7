use crate::error::ValidationError;

/// The hosting UI as seen by the command handlers: a render surface, a
/// notifier, and a way to defer the computer's reply.
pub trait Frontend {
    /// Redraw one cell; `None` means empty.
    fn update_cell(&mut self, index: usize, cell: Option<char>);

    /// Replace the board with 9 empty cells.
    fn rebuild_board(&mut self);

    /// Show an outcome message such as "Alice wins!".
    fn notify(&mut self, message: &str);

    fn report_error(&mut self, error: &ValidationError);

    /// Arrange for `Command::ComputerMove { token }` to be handled shortly.
    fn schedule_computer_move(&mut self, token: u64);
}
