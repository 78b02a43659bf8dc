use group_house::{bezout, jacobi};
use num_bigint::BigInt;

fn main() {
    let a = BigInt::from(240);
    let b = BigInt::from(46);
    match bezout(&a, &b) {
        Ok(cert) => {
            println!(
                "{} * {} + {} * {} = {}",
                a, cert.x, b, cert.y, cert.gcd
            );
        }
        Err(err) => {
            eprintln!("bezout failed: {err}");
            std::process::exit(1);
        }
    }

    let denominator = BigInt::from(15);
    let row: Vec<i8> = (0..15)
        .map(|a| jacobi(&BigInt::from(a), &denominator).unwrap_or(0))
        .collect();
    println!("jacobi row mod 15: {row:?}");
}
