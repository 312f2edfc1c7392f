#[path = "../common/mod.rs"]
mod common;

use dfrnfc::mifare::DATA_BLOCK_TABLE;
use dfrnfc::storage::LinearStore;

#[test]
fn bytes_come_back_where_they_were_put() {
    let (_card, mut reader) = common::helpers::initialized_reader();
    let mut store = LinearStore::new(&mut reader);

    store.write_range(20, b"hello").unwrap();
    assert_eq!(store.read_range(20, 5).unwrap(), b"hello");
}

#[test]
fn single_byte_write_preserves_its_block() {
    let (card, mut reader) = common::helpers::initialized_reader();
    card.set_block(1, common::fixtures::block_counting(0x20));

    let mut store = LinearStore::new(&mut reader);
    store.write_byte(0, 0x42).unwrap();
    assert_eq!(store.read_byte(0).unwrap(), 0x42);

    let mut expected = common::fixtures::block_counting(0x20);
    expected[0] = 0x42;
    assert_eq!(card.block(1), expected);
}

#[test]
fn writes_span_adjacent_blocks() {
    let (card, mut reader) = common::helpers::initialized_reader();
    let mut store = LinearStore::new(&mut reader);

    // Offsets 14..=17 straddle blocks 1 and 2.
    store.write_range(14, &[0xAA, 0xBB, 0xCC, 0xDD]).unwrap();
    assert_eq!(
        store.read_range(14, 4).unwrap(),
        vec![0xAA, 0xBB, 0xCC, 0xDD]
    );

    assert_eq!(card.block(1)[14..], [0xAA, 0xBB]);
    assert_eq!(card.block(2)[..2], [0xCC, 0xDD]);
}

#[test]
fn spans_leap_the_sector_trailer() {
    let (card, mut reader) = common::helpers::initialized_reader();
    let mut store = LinearStore::new(&mut reader);

    // Offsets 30..=34 cross from block 2 into block 4; trailer 3 sits
    // between them on the card.
    store.write_range(30, &[1, 2, 3, 4, 5]).unwrap();
    assert_eq!(store.read_range(30, 5).unwrap(), vec![1, 2, 3, 4, 5]);

    assert_eq!(card.block(2)[14..], [1, 2]);
    assert_eq!(card.block(4)[..3], [3, 4, 5]);
    assert_eq!(card.block(3), [0u8; 16], "trailer must stay untouched");
}

#[test]
fn multi_block_windows_land_in_address_order() {
    let (card, mut reader) = common::helpers::initialized_reader();
    let mut store = LinearStore::new(&mut reader);

    let pattern: Vec<u8> = (0..40u8).map(|i| 0x80 | i).collect();
    store.write_range(8, &pattern).unwrap();

    // Tail of block 1, all of block 2, head of block 4.
    assert_eq!(card.block(1)[8..], pattern[..8]);
    assert_eq!(card.block(2)[..], pattern[8..24]);
    assert_eq!(card.block(4)[..], pattern[24..40]);

    assert_eq!(store.read_range(8, 40).unwrap(), pattern);
}

#[test]
fn the_full_space_roundtrips() {
    let (card, mut reader) = common::helpers::initialized_reader();
    let mut store = LinearStore::new(&mut reader);

    let pattern: Vec<u8> = (0..store.capacity()).map(|i| (i % 251) as u8).collect();
    store.write_range(0, &pattern).unwrap();
    assert_eq!(store.read_range(0, 752).unwrap(), pattern);

    // Physical placement at both ends of the block table.
    assert_eq!(card.block(DATA_BLOCK_TABLE[0])[..], pattern[..16]);
    assert_eq!(card.block(DATA_BLOCK_TABLE[46])[..], pattern[736..]);

    // The manufacturer block and every trailer stay untouched.
    assert_eq!(card.block(0), [0u8; 16]);
    for sector in 0..16u8 {
        assert_eq!(card.block(sector * 4 + 3), [0u8; 16]);
    }
}
