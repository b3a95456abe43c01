use clap::Subcommand;

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the stored theme
    Get,

    /// Store a theme
    Set {
        /// "light" or "dark"
        theme: String,
    },

    /// Switch between light and dark
    Toggle,
}
