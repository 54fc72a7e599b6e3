//! selkit CLI
//!
//! Builds a selector from `kind=value` parts and combinator tokens and
//! prints it.

mod args;
mod hints;

use clap::Parser;
use selkit_common::warning::warn_once;

/// selkit — build and render CSS selectors
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"STEPS:
    element=NAME  (or tag=NAME)
    id=NAME
    class=NAME
    attribute=BODY  (or attr=BODY, written without brackets)
    pseudo-class=NAME
    pseudo-element=NAME
    combinators: '>' '+' '~' ' ' or child, next-sibling, subsequent-sibling, descendant

EXAMPLES:
    # div#main.container + table#data
    selkit element=div id=main class=container + element=table id=data

    # a[href$=".png"]:focus
    selkit element=a 'attr=href$=".png"' pseudo-class=focus

    # ul > li ~ li
    selkit element=ul child element=li subsequent-sibling element=li

    # Dump the selector model
    selkit --json class=menu child element=li
"#)]
struct Cli {
    /// Selector parts and combinators, in order
    #[arg(value_name = "STEP", required = true, allow_hyphen_values = true)]
    steps: Vec<String>,

    /// Print the selector model as JSON instead of the rendered text
    #[arg(long)]
    json: bool,

    /// Do not print hints about suspicious part values
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let selector = args::build(&cli.steps)?;

    if !cli.quiet {
        for hint in hints::collect(&selector) {
            warn_once("cli", &hint);
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&selector)?);
    } else {
        println!("{selector}");
    }

    Ok(())
}
