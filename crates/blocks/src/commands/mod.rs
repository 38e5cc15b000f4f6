//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod types;

pub(crate) use render::RenderArgs;
pub(crate) use types::TypesArgs;

use blocks_render::OutputFormat;
use clap::ValueEnum;

/// Output format selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    Html,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => Self::Html,
            FormatArg::Markdown => Self::Markdown,
        }
    }
}
