// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `demo` and `ask`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → f32, PathBuf, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::demo_use_case::{DEMO_PROVIDER, DEMO_THRESHOLD};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the scripted four-turn conversational Q&A demo
    Demo(DemoArgs),

    /// Answer one question against a context document
    Ask(AskArgs),
}

/// Arguments for the `demo` command. The conversation itself is
/// fixed — context, questions, provider and threshold are part of
/// the script — so only the models root is configurable.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Directory containing pre-trained model directories
    #[arg(long, default_value = "models")]
    pub models_dir: PathBuf,
}

/// All arguments for the `ask` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The natural language question to answer
    #[arg(long)]
    pub question: String,

    /// Context document to answer against (.docx or plain text)
    #[arg(long)]
    pub context_file: PathBuf,

    /// Name of the pre-trained model to bind
    #[arg(long, default_value = DEMO_PROVIDER)]
    pub provider: String,

    /// Minimum confidence score required to surface an answer
    /// instead of rejecting it as unanswerable
    #[arg(long, default_value_t = DEMO_THRESHOLD)]
    pub threshold: f32,

    /// Directory containing pre-trained model directories
    #[arg(long, default_value = "models")]
    pub models_dir: PathBuf,
}
