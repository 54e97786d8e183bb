use huffman::{build_code, count, decode, encode, CodeTree, Error, FrequencyTable, Options};
use test_case::test_case;

#[test]
fn classic_weights_are_optimal() {
    let freq = FrequencyTable::from_counts(vec![
        ('a', 5),
        ('b', 9),
        ('c', 12),
        ('d', 13),
        ('e', 16),
        ('f', 45),
    ]);
    let h = huffman::Huffman::from_frequencies(freq.clone()).unwrap();

    // 45*1 + (12 + 13 + 16)*3 + (5 + 9)*4
    assert_eq!(h.table().weighted_length(&freq), 224);
    // a fixed-length code needs 3 bits per symbol
    assert!(h.table().weighted_length(&freq) < 300);
    assert_eq!(h.tree().weight(), 100);
}

#[test]
fn two_symbols() {
    let freq = count("aaab".chars());
    assert_eq!(freq, FrequencyTable::from_counts(vec![('a', 3), ('b', 1)]));

    let h = build_code("aaab".chars()).unwrap();
    assert_eq!(h.tree().leaf_count(), 2);
    assert!(h.table().iter().all(|(_, code)| code.len() == 1));

    let bits = encode("aaab".chars(), h.table(), Options::default()).unwrap();
    assert_eq!(bits.len(), 4);

    let decoded = decode(&bits.to_string(), h.tree(), Options::default()).unwrap();
    assert_eq!(decoded.into_iter().collect::<String>(), "aaab");
}

#[test]
fn empty_input() {
    assert!(count("".chars()).is_empty());
    assert_eq!(build_code("".chars()).err(), Some(Error::EmptyAlphabet));
    assert_eq!(
        CodeTree::<char>::from_frequencies(&FrequencyTable::new()),
        Err(Error::EmptyAlphabet)
    );
}

#[test]
fn malformed_bits() {
    let h = build_code("aaab".chars()).unwrap();
    assert_eq!(
        decode("012", h.tree(), Options::default()),
        Err(Error::MalformedInput {
            position: 2,
            found: '2'
        })
    );
}

#[test]
fn single_symbol_has_empty_code() {
    let h = build_code("aaaa".chars()).unwrap();
    assert!(h.tree().is_single_leaf());
    assert_eq!(h.table().len(), 1);
    assert!(h.table().code(&'a').unwrap().is_empty());

    let bits = encode("aaaa".chars(), h.table(), Options::strict()).unwrap();
    assert!(bits.is_empty());

    // the bits carry no count, so nothing comes back
    assert_eq!(decode("", h.tree(), Options::default()), Ok(vec![]));
    assert_eq!(
        decode("0", h.tree(), Options::default()),
        Err(Error::SingleLeafTree)
    );
}

#[test]
fn unknown_symbol_lookup() {
    let h = build_code("abc".chars()).unwrap();
    assert_eq!(h.table().code(&'z'), Err(Error::NotFound));
    assert_eq!(h.tree().code_of(&'z'), Err(Error::NotFound));
}

#[test_case("aaab", "aaxab", "1110" ; "two symbols")]
#[test_case("ab", "zzz", "" ; "nothing mapped")]
fn unmapped_symbols_are_skipped(source: &str, input: &str, expected: &str) {
    let h = build_code(source.chars()).unwrap();
    let bits = encode(input.chars(), h.table(), Options::default()).unwrap();
    assert_eq!(bits.to_string(), expected);
}

#[test]
fn unmapped_symbol_rejected_when_strict() {
    let h = build_code("aaab".chars()).unwrap();
    assert_eq!(
        encode("aaxab".chars(), h.table(), Options::strict()),
        Err(Error::UnmappedSymbol { position: 2 })
    );
}

#[test_case(Options::default(), Ok("ab".into()) ; "discarded")]
#[test_case(Options::strict(), Err(Error::TruncatedCode { position: 3 }) ; "rejected")]
fn truncated_tail(options: Options, expected: Result<String, Error>) {
    // a = 0, b = 10, c = 11
    let tree = CodeTree::from_weights(vec![('a', 2), ('b', 1), ('c', 1)]).unwrap();
    let decoded = decode("0101", &tree, options).map(|v| v.into_iter().collect::<String>());
    assert_eq!(decoded, expected);
}

#[test_case("aaab" ; "two symbols")]
#[test_case("abracadabra" ; "abracadabra")]
#[test_case("Hello world!" ; "hello world")]
#[test_case("ünïcödé ✓ text" ; "unicode")]
fn round_trip(text: &str) {
    let h = build_code(text.chars()).unwrap();
    let bits = h.encoder(Options::strict()).encode(text.chars()).unwrap();
    let decoded = h.decoder(Options::strict()).decode(&bits.to_string()).unwrap();
    assert_eq!(decoded.into_iter().collect::<String>(), text);
}
