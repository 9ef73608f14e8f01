use ingredient_editor::{render, Action, EditorConfig, EditorError, IngredientEditor};
use log::{debug, error};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), EditorError> {
    env_logger::init();

    let config = EditorConfig::load()?;
    debug!("Loaded configuration: {:?}", config);

    let mut editor = IngredientEditor::builder().config(config.clone()).build();

    // One action per line on stdin; see `Action` for the command syntax
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                error!("{}", e);
                continue;
            }
        };

        match action {
            Action::Render => print!("{}", render(&editor, &config.view)),
            Action::Snapshot => {
                println!("{}", serde_json::to_string_pretty(&editor.snapshot())?)
            }
            action => {
                if let Err(e) = editor.dispatch(action).await {
                    error!("{}", e);
                }
            }
        }
    }

    Ok(())
}
