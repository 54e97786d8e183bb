use huffman::Options;

fn main() {
    env_logger::init();

    let s = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("Hello my name is Sam!"));
    let chars: Vec<char> = s.chars().collect();

    let h = huffman::build_code(chars.iter().copied()).expect("text must not be empty");
    let report = h
        .report(&chars, |c| c.len_utf8() as u64 * 8, Options::default())
        .unwrap();
    print!("{}", report);
    if let Some(avg) = report.average_code_length() {
        println!("Average code length: {:.3} bits", avg);
    }

    let dec = h
        .decoder(Options::strict())
        .decode(&report.encoded.to_string())
        .unwrap();

    println!("{:?}", dec.into_iter().collect::<String>());
}
