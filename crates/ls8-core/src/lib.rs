//! LS-8 - Core Library
//!
//! Public API surface for the LS-8 register machine.

pub mod error;
pub mod config;
pub mod bytecode;
pub mod vm;
pub mod loader;

// Re-export commonly used types
pub use error::{Ls8Error, Ls8Result};
pub use config::{MachineConfig, StackGuard};
pub use bytecode::{Instruction, Opcode};
pub use vm::{Flow, Machine};
pub use loader::ProgramLoader;

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vm::registers::{SP, STACK_TOP};

	const HLT: u8 = Opcode::Hlt as u8;
	const LDI: u8 = Opcode::Ldi as u8;
	const PRN: u8 = Opcode::Prn as u8;
	const MUL: u8 = Opcode::Mul as u8;
	const CMP: u8 = Opcode::Cmp as u8;
	const PUSH: u8 = Opcode::Push as u8;
	const POP: u8 = Opcode::Pop as u8;
	const CALL: u8 = Opcode::Call as u8;
	const RET: u8 = Opcode::Ret as u8;
	const JMP: u8 = Opcode::Jmp as u8;
	const JEQ: u8 = Opcode::Jeq as u8;
	const JNE: u8 = Opcode::Jne as u8;

	fn machine(program: &[u8]) -> Machine<Vec<u8>> {
		machine_with(MachineConfig::new(), program)
	}

	fn machine_with(config: MachineConfig, program: &[u8]) -> Machine<Vec<u8>> {
		let mut vm = Machine::with_output(config, Vec::new());
		vm.load(program).expect("load failed");
		vm
	}

	fn output(vm: Machine<Vec<u8>>) -> String {
		String::from_utf8(vm.into_output()).expect("output is not utf-8")
	}

	#[test]
	fn mult_program_prints_72() {
		let program = [LDI, 0, 8, LDI, 1, 9, MUL, 0, 1, PRN, 0, HLT];
		let mut vm = machine(&program);
		let cycles = vm.run().expect("execution failed");
		assert_eq!(cycles, 5);
		assert!(vm.is_halted());
		assert_eq!(vm.pc(), 11);
		assert_eq!(output(vm), "72\n");
	}

	#[test]
	fn ldi_then_prn_echoes_immediate() {
		for r in 0..8u8 {
			for v in 0..=255u8 {
				let mut vm = machine(&[LDI, r, v, PRN, r, HLT]);
				vm.run().expect("execution failed");
				assert_eq!(output(vm), format!("{}\n", v));
			}
		}
	}

	#[test]
	fn mul_truncates_to_register_width() {
		let values = [0u8, 1, 2, 15, 16, 17, 100, 128, 255];
		for a in 0..7u8 {
			for b in (0..7u8).filter(|&b| b != a) {
				for &x in &values {
					for &y in &values {
						let mut vm = machine(&[LDI, a, x, LDI, b, y, MUL, a, b, HLT]);
						vm.run().expect("execution failed");
						assert_eq!(vm.registers().get(a).expect("reg a"), x.wrapping_mul(y));
						assert_eq!(vm.registers().get(b).expect("reg b"), y);
					}
				}
			}
		}
	}

	#[test]
	fn mul_register_by_itself_squares() {
		let mut vm = machine(&[LDI, 3, 12, MUL, 3, 3, HLT]);
		vm.run().expect("execution failed");
		assert_eq!(vm.registers().get(3).expect("r3"), 144);
	}

	#[test]
	fn push_pop_round_trip() {
		for r1 in 0..SP {
			for r2 in 0..SP {
				let mut vm = machine(&[LDI, r1, 0xA5, PUSH, r1, POP, r2, HLT]);
				vm.run().expect("execution failed");
				assert_eq!(vm.registers().get(r2).expect("r2"), 0xA5);
				assert_eq!(vm.registers().sp(), STACK_TOP);
			}
		}
	}

	#[test]
	fn stack_is_last_in_first_out() {
		let program = [
			LDI, 0, 1,
			LDI, 1, 2,
			PUSH, 0,
			PUSH, 1,
			POP, 2,
			POP, 3,
			PRN, 2,
			PRN, 3,
			HLT,
		];
		let mut vm = machine(&program);
		vm.run().expect("execution failed");
		assert_eq!(vm.memory().read(0xFE), 1);
		assert_eq!(vm.memory().read(0xFD), 2);
		assert_eq!(output(vm), "2\n1\n");
	}

	#[test]
	fn ret_resumes_after_call() {
		let program = [
			LDI, 1, 10, // 0
			LDI, 2, 14, // 3
			CALL, 1,    // 6
			HLT,        // 8
			HLT,        // 9
			CALL, 2,    // 10: outer
			RET,        // 12
			HLT,        // 13
			LDI, 0, 42, // 14: inner
			RET,        // 17
		];
		let mut vm = machine(&program);
		for _ in 0..3 {
			vm.step().expect("step failed");
		}
		assert_eq!(vm.pc(), 10);
		assert_eq!(vm.memory().read(0xFE), 8);

		vm.step().expect("inner call");
		assert_eq!(vm.pc(), 14);
		assert_eq!(vm.registers().sp(), 0xFD);

		vm.step().expect("ldi");
		vm.step().expect("inner ret");
		assert_eq!(vm.pc(), 12);
		vm.step().expect("outer ret");
		assert_eq!(vm.pc(), 8);
		assert_eq!(vm.registers().sp(), STACK_TOP);

		assert_eq!(vm.step().expect("hlt"), Flow::Halt);
		assert_eq!(vm.registers().get(0).expect("r0"), 42);
	}

	#[test]
	fn deeply_nested_calls_unwind() {
		const DEPTH: u8 = 20;
		// main: LDI R1,s0; CALL R1; HLT
		let mut program = vec![LDI, 1, 6, CALL, 1, HLT];
		// s_i: LDI R1,s_{i+1}; CALL R1; RET
		for i in 0..DEPTH {
			let next = 6 + 6 * (i + 1);
			program.extend([LDI, 1, next, CALL, 1, RET]);
		}
		program.extend([LDI, 0, 99, PRN, 0, RET]);

		let mut vm = machine(&program);
		vm.run().expect("execution failed");
		assert_eq!(vm.pc(), 5);
		assert_eq!(vm.registers().sp(), STACK_TOP);
		assert_eq!(output(vm), "99\n");
	}

	fn branch_program(x: u8, y: u8, jump: u8) -> [u8; 16] {
		[
			LDI, 0, x,
			LDI, 1, y,
			LDI, 2, 0x40,
			CMP, 0, 1,
			jump, 2,
			HLT, HLT,
		]
	}

	fn pc_after_branch(x: u8, y: u8, jump: u8) -> u8 {
		let mut vm = machine(&branch_program(x, y, jump));
		for _ in 0..5 {
			vm.step().expect("step failed");
		}
		vm.pc()
	}

	#[test]
	fn conditional_jumps_follow_flags() {
		// less
		assert_eq!(pc_after_branch(3, 9, JEQ), 14);
		assert_eq!(pc_after_branch(3, 9, JNE), 0x40);
		// equal
		assert_eq!(pc_after_branch(9, 9, JEQ), 0x40);
		assert_eq!(pc_after_branch(9, 9, JNE), 14);
		// greater
		assert_eq!(pc_after_branch(200, 9, JEQ), 14);
		assert_eq!(pc_after_branch(200, 9, JNE), 0x40);
	}

	#[test]
	fn greater_than_sets_greater_flag() {
		let mut vm = machine(&branch_program(200, 9, JEQ));
		for _ in 0..4 {
			vm.step().expect("step failed");
		}
		assert_eq!(vm.flags().bits(), 0b0000_0010);
	}

	#[test]
	fn untaken_jump_ignores_target_register() {
		// flags = greater, so JEQ falls through without reading R9
		let mut vm = machine(&[LDI, 0, 1, CMP, 0, 1, JEQ, 9, PRN, 0, HLT]);
		vm.run().expect("execution failed");
		assert!(vm.is_halted());
		assert_eq!(vm.pc(), 10);
		assert_eq!(output(vm), "1\n");

		// flags = equal, so JNE falls through
		let mut vm = machine(&[CMP, 0, 0, JNE, 200, HLT]);
		vm.run().expect("execution failed");
		assert_eq!(vm.pc(), 5);
	}

	#[test]
	fn taken_jump_validates_target_register() {
		let mut vm = machine(&[CMP, 0, 0, JEQ, 9, HLT]);
		assert!(matches!(vm.run(), Err(Ls8Error::InvalidRegister(9))));
		assert_eq!(vm.pc(), 3);
	}

	#[test]
	fn push_r7_pushes_pointer_before_decrement() {
		let mut vm = machine(&[PUSH, SP, POP, 0, HLT]);
		vm.step().expect("push");
		assert_eq!(vm.registers().sp(), 0xFE);
		assert_eq!(vm.memory().read(0xFE), STACK_TOP);
		vm.run().expect("execution failed");
		assert_eq!(vm.registers().get(0).expect("r0"), STACK_TOP);
		assert_eq!(vm.registers().sp(), STACK_TOP);
	}

	#[test]
	fn pop_r7_loads_popped_value_into_pointer() {
		let mut vm = machine(&[LDI, 0, 0x40, PUSH, 0, POP, SP, HLT]);
		vm.run().expect("execution failed");
		assert_eq!(vm.registers().sp(), 0x40);
	}

	#[test]
	fn jne_without_compare_jumps() {
		let mut vm = machine(&[LDI, 0, 0x20, JNE, 0, HLT]);
		vm.step().expect("ldi");
		vm.step().expect("jne");
		assert_eq!(vm.pc(), 0x20);
	}

	#[test]
	fn jmp_is_unconditional() {
		let mut vm = machine(&[LDI, 4, 6, JMP, 4, HLT, PRN, 4, HLT]);
		vm.run().expect("execution failed");
		assert_eq!(output(vm), "6\n");
	}

	#[test]
	fn unknown_opcode_stops_without_side_effects() {
		let program = [LDI, 0, 5, 0xFF, 1, 2, HLT];
		let mut vm = machine(&program);
		vm.step().expect("ldi");
		let memory = vm.memory().as_slice().to_vec();
		let registers = vm.registers().clone();

		match vm.run() {
			Err(Ls8Error::UnknownOpcode { opcode, pc }) => {
				assert_eq!(opcode, 0xFF);
				assert_eq!(pc, 3);
			}
			other => panic!("unexpected result: {:?}", other),
		}
		assert_eq!(vm.memory().as_slice(), &memory[..]);
		assert_eq!(vm.registers(), &registers);
		assert_eq!(vm.pc(), 3);
		assert!(!vm.is_halted());
		assert_eq!(output(vm), "");
	}

	#[test]
	fn empty_memory_is_unknown_opcode() {
		let mut vm = machine(&[]);
		let res = vm.run();
		assert!(matches!(res, Err(Ls8Error::UnknownOpcode { opcode: 0, pc: 0 })));
	}

	#[test]
	fn invalid_register_operand_is_fatal() {
		let mut vm = machine(&[LDI, 9, 1, HLT]);
		assert!(matches!(vm.run(), Err(Ls8Error::InvalidRegister(9))));
		assert_eq!(vm.pc(), 0);
	}

	#[test]
	fn step_after_halt_is_noop() {
		let mut vm = machine(&[HLT, PRN, 0]);
		assert_eq!(vm.step().expect("hlt"), Flow::Halt);
		assert_eq!(vm.step().expect("noop"), Flow::Halt);
		assert_eq!(vm.cycles(), 1);
		assert_eq!(vm.pc(), 0);
		assert_eq!(output(vm), "");
	}

	#[test]
	fn cycle_limit_stops_infinite_loop() {
		let mut cfg = MachineConfig::new();
		cfg.max_cycles = Some(50);
		let mut vm = machine_with(cfg, &[LDI, 0, 3, JMP, 0]);
		assert!(matches!(vm.run(), Err(Ls8Error::CycleLimitExceeded(50))));
		assert_eq!(vm.cycles(), 50);
	}

	#[test]
	fn pop_on_empty_stack_traps_by_default() {
		let mut vm = machine(&[POP, 0, HLT]);
		assert!(matches!(vm.run(), Err(Ls8Error::StackUnderflow { sp: 0xFF })));
		assert_eq!(vm.registers().sp(), STACK_TOP);
	}

	#[test]
	fn ret_on_empty_stack_traps_by_default() {
		let mut vm = machine(&[RET]);
		assert!(matches!(vm.run(), Err(Ls8Error::StackUnderflow { .. })));
	}

	#[test]
	fn push_past_address_zero_traps_by_default() {
		let mut vm = machine(&[LDI, SP, 0, PUSH, 0, HLT]);
		assert!(matches!(vm.run(), Err(Ls8Error::StackOverflow { sp: 0 })));
		assert_eq!(vm.memory().read(0xFF), 0);
	}

	#[test]
	fn wrap_guard_lets_pointer_wrap() {
		let mut cfg = MachineConfig::new();
		cfg.stack_guard = StackGuard::Wrap;
		let mut vm = machine_with(cfg, &[POP, 0, HLT]);
		vm.run().expect("execution failed");
		assert_eq!(vm.registers().sp(), 0);
	}

	#[test]
	fn program_counter_wraps_at_end_of_memory() {
		let mut program = vec![0u8; 256];
		program[..6].copy_from_slice(&[LDI, 1, 0xFE, JMP, 1, HLT]);
		program[0xFE] = PRN;
		program[0xFF] = 1;
		let mut vm = machine(&program);
		for _ in 0..3 {
			vm.step().expect("step failed");
		}
		assert_eq!(vm.pc(), 0);
		assert_eq!(output(vm), "254\n");
	}

	#[test]
	fn trace_line_format() {
		let vm = machine(&[LDI, 0, 8, HLT]);
		assert_eq!(
			vm.trace().to_string(),
			"TRACE: 00 00 | 82 00 08 | 00 00 00 00 00 00 00 FF"
		);
	}
}
