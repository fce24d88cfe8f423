use super::{AssemblyError, Instruction};

/// Assembles a sequence of instructions into contiguous machine code,
/// in order, starting at address 0.
pub fn assemble<I>(instructions: I) -> Result<Vec<u8>, AssemblyError>
where
    I: IntoIterator<Item = Instruction>,
{
    instructions
        .into_iter()
        .try_fold(Vec::new(), |mut machine_code, instruction| {
            machine_code.extend(instruction.assemble()?);
            Ok(machine_code)
        })
}
