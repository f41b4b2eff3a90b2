//! Statement handlers.
//!
//! Handlers never fail on bad input: unknown names, out-of-range indices
//! and type mismatches leave the state untouched. Only the limits can
//! abort a run.

use sharpsim_types::ast::{ArithOp, ArrayInit, Expr, IncDecOp, Statement};
use sharpsim_types::Value;

use crate::env::{PseudoArray, PseudoObject, SymbolTable};
use crate::error::{SimError, SimResult};
use crate::evaluator::Evaluator;
use crate::limits::Limits;
use crate::output::OutputBuffer;

/// Methods that print a canned sentence when called on an object.
pub const CANNED_METHODS: &[&str] = &["Run", "Shoot", "Speak"];

/// The sentence printed for `object.method()`, if `method` is canned.
pub fn canned_sentence(object: &PseudoObject, method: &str) -> Option<String> {
    let label = object.label();
    match method {
        "Run" => Some(format!("{label} is running.")),
        "Shoot" => Some(format!("{label} is shooting.")),
        "Speak" => Some(match object.field("sound") {
            Some(sound) => sound.to_string(),
            None => format!("{label} speaks."),
        }),
        _ => None,
    }
}

/// Applies classified statements to the run state.
pub struct Executor {
    pub table: SymbolTable,
    pub output: OutputBuffer,
    limits: Limits,
    /// Statements executed so far.
    executed: usize,
}

impl Executor {
    pub fn new(limits: Limits) -> Self {
        Self {
            table: SymbolTable::new(),
            output: OutputBuffer::new(limits.max_output_lines),
            limits,
            executed: 0,
        }
    }

    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Consume one unit of the statement budget.
    fn tick(&mut self) -> SimResult<()> {
        self.executed += 1;
        if self.executed > self.limits.max_statements {
            Err(SimError::StatementLimit {
                limit: self.limits.max_statements,
            })
        } else {
            Ok(())
        }
    }

    fn evaluate(&self, expr: &Expr) -> Value {
        Evaluator::new(&self.table).evaluate(expr)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Dispatch
    // ══════════════════════════════════════════════════════════════════════

    pub fn execute(&mut self, statement: &Statement) -> SimResult<()> {
        self.tick()?;
        match statement {
            Statement::Print { expr } => self.exec_print(expr.as_ref()),
            Statement::ArrayPrint { array, index } => self.exec_array_print(array, *index),
            Statement::Declare { name, expr } => {
                let value = self.evaluate(expr);
                self.table.define(name, value);
                Ok(())
            }
            Statement::Assign { name, expr } => {
                if self.table.get(name).is_some() {
                    let value = self.evaluate(expr);
                    self.table.set(name, value);
                }
                Ok(())
            }
            Statement::CompoundAssign { name, op, expr } => {
                self.exec_compound(name, *op, expr);
                Ok(())
            }
            Statement::IncDec { name, op } => {
                self.exec_inc_dec(name, *op);
                Ok(())
            }
            Statement::ObjectConstruct { name, class_name } => {
                self.table.insert_object(name, PseudoObject::new(class_name));
                Ok(())
            }
            Statement::FieldAssign {
                object,
                field,
                expr,
            } => {
                let value = self.evaluate(expr);
                if let Some(object) = self.table.object_mut(object) {
                    object.set_field(field, value);
                }
                Ok(())
            }
            Statement::MethodCall { object, method } => self.exec_method_call(object, method),
            Statement::ArrayConstruct { name, init } => self.exec_array_construct(name, init),
            Statement::ArrayAssign { array, index, expr } => {
                self.exec_array_assign(array, index, expr);
                Ok(())
            }
            Statement::Unrecognized => Ok(()),
        }
    }

    // ── Output ────────────────────────────────────────────────────────────

    fn exec_print(&mut self, expr: Option<&Expr>) -> SimResult<()> {
        let line = match expr {
            Some(expr) => self.evaluate(expr).to_string(),
            None => String::new(),
        };
        self.output.push(line)
    }

    fn exec_array_print(&mut self, array: &str, index: usize) -> SimResult<()> {
        match self.table.array(array).and_then(|a| a.read(index)) {
            Some(value) => self.output.push(value.to_string()),
            None => Ok(()),
        }
    }

    fn exec_method_call(&mut self, object: &str, method: &str) -> SimResult<()> {
        let sentence = self
            .table
            .object(object)
            .and_then(|object| canned_sentence(object, method));
        match sentence {
            Some(sentence) => self.output.push(sentence),
            None => Ok(()),
        }
    }

    // ── Bindings ──────────────────────────────────────────────────────────

    fn exec_compound(&mut self, name: &str, op: ArithOp, expr: &Expr) {
        let updated = match (self.table.get(name), self.evaluate(expr)) {
            (Some(Value::Number(current)), Value::Number(rhs)) => {
                Value::Number(op.apply(*current, rhs))
            }
            (Some(Value::Str(current)), rhs) if op == ArithOp::Add => {
                Value::Str(format!("{current}{rhs}"))
            }
            _ => return,
        };
        self.table.set(name, updated);
    }

    fn exec_inc_dec(&mut self, name: &str, op: IncDecOp) {
        if let Some(Value::Number(current)) = self.table.get(name) {
            let updated = Value::Number(current + op.delta());
            self.table.set(name, updated);
        }
    }

    // ── Arrays ────────────────────────────────────────────────────────────

    fn check_array_len(&self, len: usize) -> SimResult<()> {
        if len > self.limits.max_array_len {
            return Err(SimError::ArrayTooLarge {
                len,
                limit: self.limits.max_array_len,
            });
        }
        Ok(())
    }

    fn exec_array_construct(&mut self, name: &str, init: &ArrayInit) -> SimResult<()> {
        let array = match init {
            ArrayInit::Sized(size) => {
                let Some(len) = self.evaluate(size).as_index() else {
                    return Ok(());
                };
                self.check_array_len(len)?;
                PseudoArray::with_len(len)
            }
            ArrayInit::Items(items) => {
                self.check_array_len(items.len())?;
                PseudoArray::from_values(items.iter().map(|item| self.evaluate(item)).collect())
            }
        };
        self.table.insert_array(name, array);
        Ok(())
    }

    fn exec_array_assign(&mut self, array: &str, index: &Expr, expr: &Expr) {
        let Some(index) = self.evaluate(index).as_index() else {
            return;
        };
        let value = self.evaluate(expr);
        if let Some(array) = self.table.array_mut(array) {
            array.write(index, value);
        }
    }
}
