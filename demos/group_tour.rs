use group_house::{ArithmeticError, ModularRing};
use num_bigint::BigInt;

fn tour(modulus: i64) -> Result<(), ArithmeticError> {
    let mut ring = ModularRing::new(BigInt::from(modulus))?;
    println!("modulus {modulus}");
    println!("  euler      {}", ring.euler()?);
    println!("  carmichael {}", ring.carmichael()?);
    println!("  cyclic     {}", ring.is_cyclic()?);
    if let Some(generator) = ring.generator()? {
        println!("  generator  {generator}");
        if let Some(realization) = ring.as_cyclic_group()? {
            let powers: Vec<String> = realization.iter().map(BigInt::to_string).collect();
            println!("  powers     {}", powers.join(" "));
        }
    }
    let generators: Vec<String> = ring
        .all_generators()?
        .iter()
        .map(BigInt::to_string)
        .collect();
    println!("  generators [{}]", generators.join(", "));
    Ok(())
}

fn main() {
    for modulus in [7, 8, 15] {
        if let Err(err) = tour(modulus) {
            eprintln!("tour of {modulus} failed: {err}");
            std::process::exit(1);
        }
    }
}
