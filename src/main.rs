use atm_engine::run::run;

use std::io;

fn main() {
    let stdin = io::stdin();
    run(stdin.lock(), io::stdout()).expect("console I/O failed");
}
