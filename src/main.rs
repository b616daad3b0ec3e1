fn main() {
    env_logger::init();
    calculator_brain::repl::main_app_loop();
}
