//! moodtrack main entrypoint.

use moodtrack::run;
use moodtrack::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
