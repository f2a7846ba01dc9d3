fn main() {
    dotget::run_cli();
}
