//! TypeScript ambient declarations for the scripting surface of the chain model.
//!
//! Script hosts that expose `Node`/`NamedNode` and the `log` capability can hand
//! the rendered text to a TypeScript toolchain (`lib.d.ts`).

use std::fmt::Write;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};

/// Type of a parameter or return value as seen from script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptType {
    Number,
    String,
    Void,
    /// A class declared in the same module.
    Class(&'static str),
}

/// One method of a declared class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDecl {
    pub name: &'static str,
    pub is_static: bool,
    pub params: Vec<ScriptType>,
    pub returns: ScriptType,
}

impl MemberDecl {
    fn method(name: &'static str, params: Vec<ScriptType>, returns: ScriptType) -> Self {
        Self {
            name,
            is_static: false,
            params,
            returns,
        }
    }

    fn constructor(name: &'static str, params: Vec<ScriptType>, returns: ScriptType) -> Self {
        Self {
            name,
            is_static: true,
            params,
            returns,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: &'static str,
    pub extends: Option<&'static str>,
    pub members: Vec<MemberDecl>,
}

/// Free function exported next to the classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: &'static str,
    pub params: Vec<ScriptType>,
    pub returns: ScriptType,
}

/// Declared surface: `Node`, `NamedNode` and `log`.
pub fn chain_surface() -> (Vec<ClassDecl>, Vec<FunctionDecl>) {
    use ScriptType::*;

    let node = ClassDecl {
        name: "Node",
        extends: None,
        members: vec![
            MemberDecl::constructor("create", vec![Number], Class("Node")),
            MemberDecl::method("value", vec![], Number),
            MemberDecl::method("setValue", vec![Number], Void),
            MemberDecl::method("combine", vec![Class("Node")], Class("Node")),
            MemberDecl::method("advance", vec![], Class("Node")),
            MemberDecl::method("describe", vec![], String),
        ],
    };
    let named = ClassDecl {
        name: "NamedNode",
        extends: Some("Node"),
        members: vec![
            MemberDecl::constructor("create", vec![Number], Class("NamedNode")),
            MemberDecl::method("label", vec![], String),
            MemberDecl::method("setLabel", vec![String], Void),
        ],
    };
    let log = FunctionDecl {
        name: "log",
        params: vec![String],
        returns: Void,
    };
    (vec![node, named], vec![log])
}

/// Renders [`chain_surface`] as a `declare module` block.
#[derive(Debug, Clone)]
pub struct DeclarationPrinter {
    module_name: String,
}

impl DeclarationPrinter {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
        }
    }

    #[instrument(level = "debug", skip(self), fields(module = %self.module_name))]
    pub fn render(&self) -> ApplicationResult<String> {
        if self.module_name.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "declaration module name must not be empty".to_string(),
            });
        }
        let (classes, functions) = chain_surface();
        let out = self.render_module(&classes, &functions);
        debug!(bytes = out.len(), "rendered declarations");
        Ok(out)
    }

    fn render_module(&self, classes: &[ClassDecl], functions: &[FunctionDecl]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "declare module {} {{", self.module_name);
        for class in classes {
            self.render_class(&mut out, class);
        }
        for function in functions {
            let _ = writeln!(
                out,
                "  function {}({}): {};",
                function.name,
                self.params(&function.params, true),
                self.type_name(function.returns)
            );
        }
        out.push('}');
        out
    }

    fn render_class(&self, out: &mut String, class: &ClassDecl) {
        let _ = write!(out, "  class {}", class.name);
        if let Some(base) = class.extends {
            let _ = write!(out, " extends {}", self.type_name(ScriptType::Class(base)));
        }
        out.push_str(" {\n");

        let mut members: Vec<&MemberDecl> = class.members.iter().collect();
        members.sort_by_key(|m| m.name);
        for member in members {
            let prefix = if member.is_static { "static " } else { "" };
            let _ = writeln!(
                out,
                "    {}{}({}): {};",
                prefix,
                member.name,
                self.params(&member.params, member.is_static),
                self.type_name(member.returns)
            );
        }
        out.push_str("  }\n");
    }

    /// Static callables take `this: void` and count from `arg0`; instance
    /// methods count from `arg1` since slot 0 is the receiver.
    fn params(&self, params: &[ScriptType], is_static: bool) -> String {
        let offset = if is_static { 0 } else { 1 };
        let mut parts: Vec<String> = Vec::with_capacity(params.len() + 1);
        if is_static {
            parts.push("this: void".to_string());
        }
        for (i, ty) in params.iter().enumerate() {
            parts.push(format!("arg{}: {}", i + offset, self.type_name(*ty)));
        }
        parts.join(", ")
    }

    fn type_name(&self, ty: ScriptType) -> String {
        match ty {
            ScriptType::Number => "number".to_string(),
            ScriptType::String => "string".to_string(),
            ScriptType::Void => "void".to_string(),
            ScriptType::Class(name) => format!("{}.{}", self.module_name, name),
        }
    }
}
