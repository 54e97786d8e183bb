use huffman::{build_code, Code, CodeTable, CodeTree, Node, Options, Report};
use serde::Serialize;

#[test]
fn tree_roundtrip() {
    let h = build_code("the quick brown fox".chars()).unwrap();
    let bytes = rmp_serde::to_vec(h.tree()).unwrap();
    let tree: CodeTree<char> = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(&tree, h.tree());
}

#[test]
fn table_roundtrip() {
    let h = build_code("the quick brown fox".bytes()).unwrap();
    let bytes = rmp_serde::to_vec(h.table()).unwrap();
    let table: CodeTable<u8> = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(&table, h.table());
}

#[test]
fn decode_with_restored_tree() {
    let text = "persisted trees decode the same bits";
    let h = build_code(text.chars()).unwrap();
    let bits = h.encoder(Options::default()).encode(text.chars()).unwrap();

    let bytes = rmp_serde::to_vec(h.tree()).unwrap();
    let tree: CodeTree<char> = rmp_serde::from_slice(&bytes).unwrap();
    let decoded = huffman::decode_bits(bits.as_bitslice(), &tree, Options::default()).unwrap();
    assert_eq!(decoded.into_iter().collect::<String>(), text);
}

#[derive(Serialize)]
struct FakeTree {
    nodes: Vec<Node<char>>,
    root: usize,
}

#[test]
fn rejects_invalid_trees() {
    let cyclic = FakeTree {
        nodes: vec![
            Node::Leaf {
                symbol: 'a',
                weight: 1,
            },
            Node::Internal {
                left: 0,
                right: 1,
                weight: 2,
            },
        ],
        root: 1,
    };
    let bytes = rmp_serde::to_vec(&cyclic).unwrap();
    assert!(rmp_serde::from_slice::<CodeTree<char>>(&bytes).is_err());

    let empty = FakeTree {
        nodes: vec![],
        root: 0,
    };
    let bytes = rmp_serde::to_vec(&empty).unwrap();
    assert!(rmp_serde::from_slice::<CodeTree<char>>(&bytes).is_err());
}

#[test]
fn rejects_invalid_tables() {
    let not_prefix_free: Vec<(char, &str)> = vec![('a', "0"), ('b', "01")];
    let bytes = rmp_serde::to_vec(&not_prefix_free).unwrap();
    assert!(rmp_serde::from_slice::<CodeTable<char>>(&bytes).is_err());

    let bad_bits: Vec<(char, &str)> = vec![('a', "0"), ('b', "12")];
    let bytes = rmp_serde::to_vec(&bad_bits).unwrap();
    assert!(rmp_serde::from_slice::<CodeTable<char>>(&bytes).is_err());
}

#[test]
fn code_as_string() {
    let code: Code = "1011".parse().unwrap();
    let bytes = rmp_serde::to_vec(&code).unwrap();
    let s: String = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(s, "1011");
}

#[test]
fn report_serializes() {
    let report = Report::for_text("aaab", Options::default()).unwrap();
    let bytes = rmp_serde::to_vec_named(&report).unwrap();
    assert!(!bytes.is_empty());
}
