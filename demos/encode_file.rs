use bitvec::prelude::*;
use huffman::{CodeTree, Options};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::hash::Hash;

#[derive(Serialize, Deserialize)]
#[serde(bound(deserialize = "Symbol: Deserialize<'de> + Eq + Hash"))]
struct HuffmanSerialized<Symbol> {
    data: Box<[usize]>,
    bit_len: usize,
    tree: CodeTree<Symbol>,
}

impl<Symbol> HuffmanSerialized<Symbol> {
    fn new(bv: BitVec, tree: CodeTree<Symbol>) -> Self {
        let bl = bv.len();

        Self {
            data: bv.into_boxed_bitslice().into_boxed_slice(),
            bit_len: bl,
            tree,
        }
    }

    fn into_parts(self) -> (BitVec, CodeTree<Symbol>) {
        let Self {
            data,
            bit_len,
            tree,
        } = self;

        let mut bv = BitBox::from_boxed_slice(data).into_bitvec();
        bv.resize(bit_len, false);

        (bv, tree)
    }
}

fn main() {
    env_logger::init();

    let fp = env::args()
        .nth(1)
        .expect("Please provide path to input file as first argument.");
    let options = match env::args().nth(2).as_deref() {
        Some("--strict") => Options::strict(),
        _ => Options::default(),
    };

    let input_bytes = fs::read(fp).expect("First argument was not a valid filepath.");

    // encode scope - save to file
    {
        let h = huffman::build_code(input_bytes.iter().copied()).unwrap();
        let encoded = h.encoder(options).encode(&input_bytes).unwrap();
        println!(
            "{} bytes -> {} bits ({} symbols)",
            input_bytes.len(),
            encoded.len(),
            h.table().len()
        );

        let (tree, _) = h.into_tree_and_table();
        let packed = HuffmanSerialized::new(encoded.into_bitvec(), tree);
        let data = rmp_serde::to_vec(&packed).unwrap();

        fs::write("encoded.mp", data).unwrap();
    }

    // decode scope - read from file
    {
        let file_data = fs::read("encoded.mp").unwrap();

        let packed: HuffmanSerialized<u8> = rmp_serde::from_slice(&file_data).unwrap();
        let (enc, tree) = packed.into_parts();
        let decoded = huffman::decode_bits(&enc, &tree, options).unwrap();

        println!("round trip matches: {}", decoded == input_bytes);
        fs::write("decoded.txt", decoded).unwrap();
    }
}
