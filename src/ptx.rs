//! PTX instruction data model
//!
//! Typed records for pre-parsed PTX instruction listings. Parsing raw PTX
//! text and computing instruction diffs happen upstream; this crate consumes
//! their JSON output read-only.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A single pre-parsed PTX instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Opcode mnemonic, e.g. `ld.global.f32`
    pub opcode: String,
    /// Operand strings in source order
    pub operands: Vec<String>,
}

impl Instruction {
    /// Node label used in the instruction graph: `"{index}: {opcode} {operands}"`
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        format!("{}: {} {}", index, self.opcode, self.operands.join(", "))
    }
}

/// Instruction listing for one kernel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelData {
    /// Ordered instruction sequence
    pub instructions: Vec<Instruction>,
}

/// Mapping from kernel name to its instruction listing
pub type PtxData = HashMap<String, KernelData>;

/// Load PTX data from a JSON file
pub fn load_ptx_data(path: &Path) -> Result<PtxData> {
    let contents = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&contents)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_instruction_label() {
        let ins = Instruction {
            opcode: "add.f32".to_string(),
            operands: vec!["%f1".to_string(), "%f2".to_string(), "%f3".to_string()],
        };
        assert_eq!(ins.label(4), "4: add.f32 %f1, %f2, %f3");
    }

    #[test]
    fn test_instruction_label_no_operands() {
        let ins = Instruction {
            opcode: "ret".to_string(),
            operands: vec![],
        };
        assert_eq!(ins.label(0), "0: ret ");
    }

    #[test]
    fn test_load_ptx_data_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"vec_add": {{"instructions": [{{"opcode": "mov.u32", "operands": ["%r1", "%tid.x"]}}]}}}}"#
        )
        .unwrap();

        let data = load_ptx_data(file.path()).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data["vec_add"].instructions.len(), 1);
        assert_eq!(data["vec_add"].instructions[0].opcode, "mov.u32");
    }

    #[test]
    fn test_load_ptx_data_missing_file() {
        let result = load_ptx_data(Path::new("/nonexistent/kernels.json"));
        assert!(result.is_err());
    }
}
