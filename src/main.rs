use KiNetLang::cli::cli_main::run_cli;

pub fn main() {
    run_cli();
}
