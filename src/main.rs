use rowforge::{cli, ui};

fn main() {
    if let Err(err) = cli::run() {
        ui::output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
