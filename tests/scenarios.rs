use bit_vec::BitVec;
use huffman_coder::{decode, Coder, Error, FrequencyTable, PackedMessage};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn skewed_input_compresses_and_roundtrips() {
    init_logging();
    let input = b"AAAAABBBCCD";
    let coder = Coder::build(input).unwrap();

    let frequencies = coder.frequencies();
    assert_eq!(frequencies.get(&b'A'), Some(5));
    assert_eq!(frequencies.get(&b'B'), Some(3));
    assert_eq!(frequencies.get(&b'C'), Some(2));
    assert_eq!(frequencies.get(&b'D'), Some(1));

    let codes = coder.code_table();
    let len = |s: u8| codes.get(&s).unwrap().len();
    assert!(codes.iter().all(|(_, code)| code.len() >= len(b'A')));
    assert!(codes.iter().all(|(_, code)| code.len() <= len(b'D')));
    assert!(codes.is_prefix_free());

    let bits = coder.encode(input).unwrap();
    assert!(bits.len() < 11 * 8);
    assert_eq!(coder.decode(&bits, input.len()).unwrap(), input.to_vec());
}

#[test]
fn empty_input() {
    init_logging();
    let coder = Coder::<char>::build(&[]).unwrap();
    assert!(coder.frequencies().is_empty());
    assert!(coder.tree().root().is_none());
    assert!(coder.code_table().is_empty());

    let bits = coder.encode(&[]).unwrap();
    assert!(bits.is_empty());
    let text: String = coder.decode(&bits, 0).unwrap().into_iter().collect();
    assert_eq!(text, "");
}

#[test]
fn single_symbol_alphabet() {
    init_logging();
    let input: Vec<char> = "AAAA".chars().collect();
    let coder = Coder::build(&input).unwrap();

    assert_eq!(coder.code_table().len(), 1);
    assert_eq!(coder.code_table().get(&'A').unwrap().to_string(), "0");

    let bits = coder.encode(&input).unwrap();
    assert_eq!(bits, BitVec::from_elem(4, false));

    let text: String = coder.decode(&bits, 4).unwrap().into_iter().collect();
    assert_eq!(text, "AAAA");
}

#[test]
fn unknown_symbol_is_rejected() {
    init_logging();
    let coder = Coder::build(&['A', 'A', 'A', 'A']).unwrap();
    let err = coder.encode(&['Z']).unwrap_err();
    assert!(matches!(err, Error::UnknownSymbol(ref s) if s == "'Z'"));
}

#[test]
fn decoding_without_a_tree() {
    init_logging();
    let bits = BitVec::from_elem(3, true);
    assert!(matches!(
        decode::<u8>(None, &bits, 1),
        Err(Error::InvalidTree { bits: 3 })
    ));
    assert_eq!(decode::<u8>(None, &BitVec::new(), 0).unwrap(), Vec::<u8>::new());
}

#[test]
fn textbook_distribution_cost() {
    init_logging();
    // Any optimal code for this distribution costs 785 bits.
    let table = FrequencyTable::from_weights(vec![
        ('C', 32),
        ('D', 42),
        ('E', 120),
        ('K', 7),
        ('L', 42),
        ('M', 24),
        ('U', 37),
        ('Z', 2),
    ])
    .unwrap();
    let coder = Coder::from_frequencies(table).unwrap();

    let cost: usize = coder
        .frequencies()
        .iter()
        .map(|(symbol, weight)| coder.code_table().get(symbol).unwrap().len() * weight as usize)
        .sum();
    assert_eq!(cost, 785);
    assert_eq!(coder.code_table().get(&'E').unwrap().len(), 1);
}

#[test]
fn packed_message_roundtrip() {
    init_logging();
    let text: Vec<char> = "the quick brown fox jumps over the lazy dog".chars().collect();
    let coder = Coder::build(&text).unwrap();
    let bytes = coder.pack(&text).unwrap().to_bytes().unwrap();

    let message = PackedMessage::<char>::from_bytes(&bytes).unwrap();
    assert_eq!(message.symbol_count(), text.len());
    assert_eq!(message.frequencies(), coder.frequencies());
    assert_eq!(message.unpack().unwrap(), text);
}
