use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "curio")]
#[command(about = "Search the Art Institute of Chicago and keep a local gallery", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the collection
    #[command(alias = "q")]
    Search {
        /// Search terms (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Save an artwork into the gallery by its id
    #[command(alias = "s")]
    Save {
        /// Artwork id as shown in search results
        id: i64,
    },

    /// List the gallery
    #[command(alias = "ls")]
    List,

    /// Remove an artwork from the gallery
    #[command(alias = "rm")]
    Remove {
        /// Artwork id
        id: i64,
    },

    /// Set the note on a saved artwork (max 200 characters)
    Note {
        /// Artwork id
        id: i64,

        /// Note text (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Print the IIIF image URL for an artwork
    Image {
        /// Artwork id
        id: i64,

        /// Render width
        #[arg(short, long, value_enum, default_value = "card")]
        width: WidthArg,
    },

    /// Rotate through a featured preview of the collection
    Featured {
        /// Stop after this many rotations
        #[arg(short, long, default_value_t = 5)]
        cycles: u32,

        /// Seconds between rotations
        #[arg(short, long)]
        interval: Option<f64>,

        /// Topic to feature (random when omitted)
        #[arg(short, long)]
        topic: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum WidthArg {
    Hero,
    Card,
    Thumb,
}

impl From<WidthArg> for curio::aic::ImageWidth {
    fn from(w: WidthArg) -> Self {
        match w {
            WidthArg::Hero => curio::aic::ImageWidth::Hero,
            WidthArg::Card => curio::aic::ImageWidth::Card,
            WidthArg::Thumb => curio::aic::ImageWidth::Thumb,
        }
    }
}
