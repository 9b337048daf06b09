use runic32::Alphabet;

/// Prints the rune table: index, rune and code point for each 5-bit value.
pub fn handle() -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = Alphabet::new();

    println!("Runic alphabet (base-{}):\n", alphabet.base());
    for (index, rune) in alphabet.symbols().iter().enumerate() {
        println!("  {:>2}  {}  U+{:04X}", index, rune, *rune as u32);
    }
    println!(
        "\n  pad {}  U+{:04X}",
        alphabet.padding(),
        alphabet.padding() as u32
    );

    Ok(())
}
