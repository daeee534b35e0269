use huffman_coder::{compress, decompress, Coder, FrequencyTable, HuffmanTree, Node};
use proptest::prelude::*;

fn internal_weight_sum<S>(node: &Node<S>) -> u64 {
    match node {
        Node::Leaf { .. } => 0,
        Node::Internal {
            weight,
            left,
            right,
        } => weight + internal_weight_sum(left) + internal_weight_sum(right),
    }
}

proptest! {
    #[test]
    fn test_roundtrip_bytes(
        input in prop::collection::vec(any::<u8>(), 0..1000),
    ) {
        let coder = Coder::build(&input).unwrap();
        let bits = coder.encode(&input).unwrap();
        let output = coder.decode(&bits, input.len()).unwrap();
        prop_assert_eq!(input, output);
    }

    #[test]
    fn test_roundtrip_text(input in "\\PC{0,200}") {
        let symbols: Vec<char> = input.chars().collect();
        let coder = Coder::build(&symbols).unwrap();
        let bits = coder.encode(&symbols).unwrap();
        let output: String = coder.decode(&bits, symbols.len()).unwrap().into_iter().collect();
        prop_assert_eq!(input, output);
    }

    #[test]
    fn test_packed_roundtrip(
        input in prop::collection::vec(0u8..16, 0..1000),
    ) {
        let packed = compress(&input).unwrap();
        prop_assert_eq!(decompress::<u8>(&packed).unwrap(), input);
    }

    #[test]
    fn test_codes_are_prefix_free(
        input in prop::collection::vec(any::<u8>(), 1..500),
    ) {
        let coder = Coder::build(&input).unwrap();
        let codes: Vec<_> = coder.code_table().iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b), "{} prefixes {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_encoded_len_equals_internal_weights(
        input in prop::collection::vec(0u8..32, 2..500),
    ) {
        // Every symbol pays one bit per internal node on its path.
        let coder = Coder::build(&input).unwrap();
        let root = coder.tree().root().unwrap();
        prop_assume!(!root.is_leaf());
        let bits = coder.encode(&input).unwrap();
        prop_assert_eq!(bits.len() as u64, internal_weight_sum(root));
    }

    #[test]
    fn test_not_worse_than_fixed_width(
        weights in prop::collection::vec(1u64..1000, 2..64),
    ) {
        let table = FrequencyTable::from_weights(weights.iter().enumerate().map(|(s, &w)| (s, w))).unwrap();
        let total = table.total();
        let fixed_bits = 64 - (weights.len() as u64 - 1).leading_zeros() as u64;

        let tree = HuffmanTree::build(&table).unwrap();
        let cost = internal_weight_sum(tree.root().unwrap());
        prop_assert!(cost <= total * fixed_bits);
    }
}
