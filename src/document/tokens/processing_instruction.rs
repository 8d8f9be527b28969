#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingInstruction {
    target: String,
    instruction: String,
}

impl ProcessingInstruction {
    #[inline]
    pub fn new(target: impl Into<String>, instruction: impl Into<String>) -> Self {
        ProcessingInstruction {
            target: target.into(),
            instruction: instruction.into(),
        }
    }

    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    pub fn instruction(&self) -> &str {
        &self.instruction
    }
}
