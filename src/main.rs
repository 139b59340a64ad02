use std::env;
use std::io::{self, BufRead, Write};

use log::debug;
use recipe_assistant::session::LOADING_MESSAGE;
use recipe_assistant::{format_content, render_plain, Recipe, RecipeAssistant, Session, Tab};

const HELP: &str = "\
Commands:
  generate <food>    generate a recipe (alias: g)
  category <name>    pick a cuisine filter
  save               save the generated recipe
  tab all|saved      switch view
  search [text]      filter saved recipes (empty clears)
  view [n]           open saved recipe n, or the generated one
  close              close the recipe view
  delete <n>         delete saved recipe n
  help               show this help
  quit               exit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut session = RecipeAssistant::builder().build()?;
    debug!(
        "Using {} for recipes, image search {}",
        session.workflow().provider_name(),
        if session.workflow().has_image_search() { "on" } else { "off" }
    );

    // One-shot mode: recipe-assistant <food name>
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        let query = args.join(" ");
        generate(&mut session, &query).await;
        return Ok(());
    }

    println!("AI Chef - your personal recipe assistant. Type 'help' for commands.");
    let stdin = io::stdin();
    loop {
        print!("[{}] > ", session.active_tab().label());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        debug!("command '{}' args '{}'", command, rest);

        match command {
            "" => {}
            "generate" | "g" => {
                session.set_tab(Tab::All);
                generate(&mut session, rest).await;
            }
            "category" => {
                if !session.select_category(rest) {
                    println!("Unknown category '{}'.", rest);
                }
                println!("Category: {}", session.category());
            }
            "save" => {
                session.save_generated();
                print_notice(&session);
            }
            "tab" => match rest {
                "all" => session.set_tab(Tab::All),
                "saved" => {
                    session.set_tab(Tab::Saved);
                    print_saved(&session);
                }
                _ => println!("Usage: tab all|saved"),
            },
            "search" => {
                session.set_saved_search(rest);
                session.set_tab(Tab::Saved);
                print_saved(&session);
            }
            "view" => {
                let recipe = if rest.is_empty() {
                    session.generated().cloned()
                } else {
                    saved_at(&session, rest)
                };
                match recipe {
                    Some(recipe) => {
                        session.view(recipe);
                        if let Some(recipe) = session.selected() {
                            print_recipe(recipe);
                        }
                    }
                    None => println!("Nothing to show."),
                }
            }
            "close" => session.close_detail(),
            "delete" => match saved_at(&session, rest) {
                Some(recipe) => {
                    session.delete(&recipe);
                    print_saved(&session);
                }
                None => println!("No saved recipe '{}'.", rest),
            },
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }

    Ok(())
}

async fn generate(session: &mut Session, query: &str) {
    if !query.trim().is_empty() {
        println!("{}", LOADING_MESSAGE);
    }
    match session.generate(query).await {
        Ok(Some(recipe)) => print_recipe(recipe),
        Ok(None) => println!("No recipe this time. Check the logs (RUST_LOG=warn)."),
        Err(e) => println!("{}", e),
    }
}

/// Look up a recipe by its 1-based position in the filtered saved list.
fn saved_at(session: &Session, index: &str) -> Option<Recipe> {
    let index: usize = index.parse().ok()?;
    session
        .visible_saved()
        .get(index.checked_sub(1)?)
        .map(|r| (*r).clone())
}

fn print_recipe(recipe: &Recipe) {
    println!();
    println!("{}", recipe.title);
    println!("{}", "=".repeat(recipe.title.chars().count()));
    if let Some(image) = &recipe.image {
        println!("Photo: {}", image);
    }
    println!();
    print!("{}", render_plain(&format_content(Some(&recipe.content))));
}

fn print_saved(session: &Session) {
    if !session.saved_search().is_empty() {
        println!("Saved recipes matching '{}':", session.saved_search());
    }
    let recipes = session.visible_saved();
    if recipes.is_empty() {
        println!("{}", session.empty_saved_message());
        return;
    }
    for (i, recipe) in recipes.iter().enumerate() {
        println!("{:>3}. {}", i + 1, recipe.title);
    }
}

fn print_notice(session: &Session) {
    if let Some(notice) = session.notice() {
        println!("{}", notice);
        session.dismiss_notice();
    }
}
