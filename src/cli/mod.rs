// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `demo` — runs the scripted four-turn conversation
//   2. `ask`  — answers one question against a context file
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DemoArgs, AskArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "contextual-qa",
    version = "0.1.0",
    about = "Ask questions against a text context using a pre-trained extractive Q&A model."
)]
pub struct Cli {
    /// The subcommand to run (demo or ask)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Demo(ref args) => self.run_demo(args),
            Commands::Ask(ref args)  => self.run_ask(args),
        }
    }

    /// Handles the `demo` subcommand. The provider name and the
    /// threshold are fixed by the demo script; only the models
    /// root comes from the command line.
    fn run_demo(&self, args: &DemoArgs) -> Result<()> {
        use crate::application::demo_use_case::{DemoUseCase, DEMO_PROVIDER, DEMO_THRESHOLD};
        use crate::application::session::QaSession;

        let session = QaSession::create(&args.models_dir, DEMO_PROVIDER, DEMO_THRESHOLD);
        DemoUseCase::new(session).execute()
    }

    /// Handles the `ask` subcommand.
    fn run_ask(&self, args: &AskArgs) -> Result<()> {
        use crate::application::ask_use_case::AskUseCase;

        let mut use_case = AskUseCase::new(&args.models_dir, &args.provider, args.threshold);
        use_case.execute(&args.question, &args.context_file)
    }
}
