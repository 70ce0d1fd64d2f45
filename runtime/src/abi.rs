//! Signatures of the exported functions, for code generators that call into this runtime.

use cranelift_codegen::{
    ir::{types, AbiParam, Signature, Type},
    isa::CallConv,
};
use cranelift_module::{FuncId, Linkage, Module, ModuleResult};

/// One of the functions this runtime exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Import {
    PrintInt,
    PrintFloat,
    PrintString,
    Putchard,
}

impl Import {
    pub const ALL: [Import; 4] = [
        Import::PrintInt,
        Import::PrintFloat,
        Import::PrintString,
        Import::Putchard,
    ];

    /// The unmangled symbol name the linker sees.
    pub fn symbol(self) -> &'static str {
        match self {
            Import::PrintInt => "print_int",
            Import::PrintFloat => "print_float",
            Import::PrintString => "print_string",
            Import::Putchard => "putchard",
        }
    }

    /// Looks an import up by its symbol name.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|import| import.symbol() == symbol)
    }

    /// Builds the signature of this function.
    ///
    /// `pointer_type` is only used by [`Import::PrintString`].
    pub fn signature(self, call_conv: CallConv, pointer_type: Type) -> Signature {
        let mut sig = Signature::new(call_conv);
        match self {
            Import::PrintInt => sig.params.push(AbiParam::new(types::I32)),
            Import::PrintFloat => sig.params.push(AbiParam::new(types::F64)),
            Import::PrintString => sig.params.push(AbiParam::new(pointer_type)),
            Import::Putchard => {
                sig.params.push(AbiParam::new(types::F64));
                sig.returns.push(AbiParam::new(types::F64));
            }
        }
        sig
    }

    /// Declares this function as an import of `module`, using the module's calling convention
    /// and pointer width.
    pub fn declare<M: Module>(self, module: &mut M) -> ModuleResult<FuncId> {
        let sig = self.signature(
            module.isa().default_call_conv(),
            module.target_config().pointer_type(),
        );
        module.declare_function(self.symbol(), Linkage::Import, &sig)
    }
}

#[cfg(test)]
mod test {
    use cranelift_codegen::{
        ir::{types, AbiParam},
        isa::CallConv,
    };

    use super::Import;

    #[test]
    fn symbols_round_trip() {
        for import in Import::ALL {
            assert_eq!(Import::from_symbol(import.symbol()), Some(import));
        }
        assert_eq!(Import::from_symbol("printf"), None);
    }

    #[test]
    fn print_int_takes_a_32_bit_int() {
        let sig = Import::PrintInt.signature(CallConv::SystemV, types::I64);
        assert_eq!(sig.params, vec![AbiParam::new(types::I32)]);
        assert!(sig.returns.is_empty());
    }

    #[test]
    fn print_float_takes_a_double() {
        let sig = Import::PrintFloat.signature(CallConv::SystemV, types::I64);
        assert_eq!(sig.params, vec![AbiParam::new(types::F64)]);
        assert!(sig.returns.is_empty());
    }

    #[test]
    fn print_string_takes_a_pointer() {
        let sig = Import::PrintString.signature(CallConv::SystemV, types::I32);
        assert_eq!(sig.params, vec![AbiParam::new(types::I32)]);
        assert!(sig.returns.is_empty());
    }

    #[test]
    fn putchard_returns_a_double() {
        let sig = Import::Putchard.signature(CallConv::WindowsFastcall, types::I64);
        assert_eq!(sig.call_conv, CallConv::WindowsFastcall);
        assert_eq!(sig.params, vec![AbiParam::new(types::F64)]);
        assert_eq!(sig.returns, vec![AbiParam::new(types::F64)]);
    }
}
