fn main() {
    apimocker::app::cli::run();
}
