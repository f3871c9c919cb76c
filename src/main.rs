fn main() {
    escala_admin::app::cli::run();
}
