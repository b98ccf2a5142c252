// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Class-table construction from the parse tree.

use std::rc::Rc;

use indexmap::IndexMap;
use steep_ast::{keyword, Node};

use crate::decl::{ClassDecl, FieldDecl, MethodDecl};
use crate::value::Value;

use super::{Interpreter, RuntimeError};

impl Interpreter {
    /// Build the class table from the parsed declarations.
    ///
    /// Validates name uniqueness at every level and the entry contract:
    /// the program must declare a `main` class, and that class must declare
    /// a `main` method.
    pub fn load_classes(&mut self, program: &[Node]) -> Result<(), RuntimeError> {
        for decl in program {
            let class = parse_class(decl)?;
            if self.classes.contains_key(&class.name) {
                return Err(RuntimeError::Name(format!(
                    "duplicate class name {}",
                    class.name
                )));
            }
            self.classes.insert(class.name.clone(), Rc::new(class));
        }

        let entry = self.classes.get(keyword::MAIN_CLASS).ok_or_else(|| {
            RuntimeError::Syntax(format!(
                "program must declare a {} class",
                keyword::MAIN_CLASS
            ))
        })?;
        if !entry.methods.contains_key(keyword::MAIN_METHOD) {
            return Err(RuntimeError::Syntax(format!(
                "the {} class must declare a {} method",
                keyword::MAIN_CLASS,
                keyword::MAIN_METHOD
            )));
        }
        Ok(())
    }

    /// Class declaration by name; `new` depends on this.
    pub fn lookup_class(&self, name: &str) -> Result<Rc<ClassDecl>, RuntimeError> {
        self.classes
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::Type(format!("class {} does not exist", name)))
    }
}

fn parse_class(decl: &Node) -> Result<ClassDecl, RuntimeError> {
    let items = match decl.as_list() {
        Some(items) if decl.head_token() == Some(keyword::CLASS) => items,
        _ => {
            return Err(RuntimeError::Syntax(format!(
                "expected a class declaration, got {}",
                decl
            )))
        }
    };
    let name = items.get(1).and_then(Node::as_token).ok_or_else(|| {
        RuntimeError::Syntax("class declaration is missing its name".to_string())
    })?;

    let mut fields: IndexMap<String, Value> = IndexMap::new();
    let mut methods: IndexMap<String, MethodDecl> = IndexMap::new();

    for item in &items[2..] {
        match item.head_token() {
            Some(tag) if tag == keyword::FIELD => {
                let field = parse_field(item)?;
                if fields.contains_key(&field.name) {
                    return Err(RuntimeError::Name(format!(
                        "field name {} already exists in class {}",
                        field.name, name
                    )));
                }
                fields.insert(field.name, field.default);
            }
            Some(tag) if tag == keyword::METHOD => {
                let method = parse_method(item)?;
                if methods.contains_key(&method.name) {
                    return Err(RuntimeError::Name(format!(
                        "method name {} already exists in class {}",
                        method.name, name
                    )));
                }
                methods.insert(method.name.clone(), method);
            }
            _ => {
                return Err(RuntimeError::Syntax(format!(
                    "class {} contains a declaration that is neither a field nor a method",
                    name
                )))
            }
        }
    }

    Ok(ClassDecl {
        name: name.to_string(),
        fields,
        methods: Rc::new(methods),
    })
}

fn parse_field(item: &Node) -> Result<FieldDecl, RuntimeError> {
    let (name, default) = match item.as_list() {
        Some([_, name, default]) => (name, default),
        _ => {
            return Err(RuntimeError::Syntax(
                "field declaration must be (field name value)".to_string(),
            ))
        }
    };
    let name = name
        .as_token()
        .ok_or_else(|| RuntimeError::Syntax("field name must be a single token".to_string()))?;
    let default = default
        .as_token()
        .and_then(Value::from_literal)
        .ok_or_else(|| {
            RuntimeError::Syntax(format!("field {} must default to a literal value", name))
        })?;
    Ok(FieldDecl {
        name: name.to_string(),
        default,
    })
}

fn parse_method(item: &Node) -> Result<MethodDecl, RuntimeError> {
    let (name, params, body) = match item.as_list() {
        Some([_, name, params, body]) => (name, params, body),
        _ => {
            return Err(RuntimeError::Syntax(
                "method declaration must be (method name (params) body)".to_string(),
            ))
        }
    };
    let name = name
        .as_token()
        .ok_or_else(|| RuntimeError::Syntax("method name must be a single token".to_string()))?;
    let params = params.as_list().ok_or_else(|| {
        RuntimeError::Syntax(format!("parameter list of method {} must be a list", name))
    })?;
    let params = params
        .iter()
        .map(|param| {
            param.as_token().map(str::to_string).ok_or_else(|| {
                RuntimeError::Syntax(format!(
                    "parameters of method {} must be single tokens",
                    name
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MethodDecl {
        name: name.to_string(),
        params,
        body: body.clone(),
    })
}
