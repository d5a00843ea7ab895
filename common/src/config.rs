#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Disables ANSI colors in terminal output.
    ///
    /// Colors are also dropped automatically when stdout is not a terminal.
    pub no_color: bool,
    /// Quiet level. Anything above zero hides decorative headers.
    pub quiet: u8,
}
