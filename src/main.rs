fn main() {
    appforge::app::cli::run();
}
