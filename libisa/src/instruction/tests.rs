use super::kind::InstructionKind;
use super::{assembler, AssemblyError, Instruction};

#[test]
fn assembles_observed_encodings() {
    let cases = [
        (Instruction::new(InstructionKind::Nop), vec![0]),
        (Instruction::new(InstructionKind::Halt), vec![1]),
        (
            Instruction::new(InstructionKind::Push).with_reg_a(0),
            vec![69, 0],
        ),
        (
            Instruction::new(InstructionKind::Pop).with_reg_a(1),
            vec![70, 1],
        ),
        (
            Instruction::new(InstructionKind::Prn).with_reg_a(0),
            vec![71, 0],
        ),
        (
            Instruction::new(InstructionKind::Jmp).with_reg_a(2),
            vec![84, 2],
        ),
        (
            Instruction::new(InstructionKind::Jeq).with_reg_a(2),
            vec![85, 2],
        ),
        (
            Instruction::new(InstructionKind::Jne).with_reg_a(2),
            vec![86, 2],
        ),
        (
            Instruction::new(InstructionKind::Ldi)
                .with_reg_a(0)
                .with_immediate(5),
            vec![130, 0, 5],
        ),
        (
            Instruction::new(InstructionKind::Mul)
                .with_reg_a(0)
                .with_reg_b(1),
            vec![162, 0, 1],
        ),
        (
            Instruction::new(InstructionKind::Cmp)
                .with_reg_a(0)
                .with_reg_b(1),
            vec![167, 0, 1],
        ),
    ];

    for (instruction, expected) in cases {
        assert_eq!(instruction.assemble().unwrap(), expected, "{}", instruction);
    }
}

#[test]
fn opcodes_roundtrip_through_decode() {
    for kind in all_kinds() {
        assert_eq!(InstructionKind::from_opcode(kind.opcode()), Some(kind));
    }
}

#[test]
fn opcode_encoding_structure() {
    // Bits 7-6 carry the operand count, bit 5 the ALU class.
    for kind in all_kinds() {
        assert_eq!(
            kind.operand_count(),
            (kind.opcode() >> 6) as usize,
            "{}",
            kind
        );
        assert_eq!(kind.is_alu(), kind.opcode() & 0b0010_0000 != 0, "{}", kind);
    }
}

#[test]
fn unknown_opcodes_decode_to_none() {
    assert_eq!(InstructionKind::from_opcode(2), None);
    assert_eq!(InstructionKind::from_opcode(255), None);
}

#[test]
fn missing_operands_fail_assembly() {
    assert_eq!(
        Instruction::new(InstructionKind::Push).assemble(),
        Err(AssemblyError::MissingRegister)
    );

    assert_eq!(
        Instruction::new(InstructionKind::Ldi).with_reg_a(0).assemble(),
        Err(AssemblyError::MissingImmediate)
    );
}

#[test]
fn assembles_instruction_sequence() {
    let machine_code = assembler::assemble(vec![
        Instruction::new(InstructionKind::Ldi)
            .with_reg_a(0)
            .with_immediate(5),
        Instruction::new(InstructionKind::Prn).with_reg_a(0),
        Instruction::new(InstructionKind::Halt),
    ])
    .unwrap();

    assert_eq!(machine_code, vec![130, 0, 5, 71, 0, 1]);
}

#[test]
fn mnemonic_table_roundtrips() {
    assert_eq!(InstructionKind::Ldi.mnemonic(), "LDI");
    assert_eq!(InstructionKind::from_mnemonic("CMP"), Some(InstructionKind::Cmp));
    assert_eq!(InstructionKind::from_mnemonic("XYZZY"), None);
}

fn all_kinds() -> [InstructionKind; 16] {
    [
        InstructionKind::Nop,
        InstructionKind::Halt,
        InstructionKind::Push,
        InstructionKind::Pop,
        InstructionKind::Prn,
        InstructionKind::Ldi,
        InstructionKind::Jmp,
        InstructionKind::Jeq,
        InstructionKind::Jne,
        InstructionKind::Add,
        InstructionKind::Sub,
        InstructionKind::Mul,
        InstructionKind::And,
        InstructionKind::Inc,
        InstructionKind::Dec,
        InstructionKind::Cmp,
    ]
}

#[test]
fn display_formats_operands() {
    let ldi = Instruction::new(InstructionKind::Ldi)
        .with_reg_a(0)
        .with_immediate(5);
    assert_eq!(ldi.to_string(), "LDI %0, $5");

    let mul = Instruction::new(InstructionKind::Mul)
        .with_reg_a(0)
        .with_reg_b(1);
    assert_eq!(mul.to_string(), "MUL %0, %1");
}
