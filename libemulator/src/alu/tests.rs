use super::flags::ALUFlags;
use super::ALU;

#[test]
fn cmp_sets_exactly_one_flag() {
    let mut alu = ALU::new();

    alu.cmp(1, 2);
    assert_eq!(alu.flags, ALUFlags::LESS);

    alu.cmp(2, 1);
    assert_eq!(alu.flags, ALUFlags::GREATER);

    alu.cmp(2, 2);
    assert_eq!(alu.flags, ALUFlags::EQUAL);

    assert_eq!(alu.flags.bits().count_ones(), 1);
}

#[test]
fn arithmetic_wraps_at_byte_width() {
    let alu = ALU::new();

    assert_eq!(alu.add(200, 100), 44);
    assert_eq!(alu.sub(0, 1), 255);
    assert_eq!(alu.mul(16, 16), 0);
    assert_eq!(alu.inc(255), 0);
    assert_eq!(alu.dec(0), 255);
    assert_eq!(alu.and(0b1100, 0b1010), 0b1000);
}

#[test]
fn arithmetic_leaves_flags_untouched() {
    let mut alu = ALU::new();
    alu.cmp(1, 1);

    alu.add(1, 2);
    alu.mul(3, 4);

    assert_eq!(alu.flags, ALUFlags::EQUAL);
}
