//! Sample registry used by `fnreflect demo`.

use std::any::Any;
use std::sync::Arc;

use crate::errors::HookError;
use crate::{Classify, FunctionFactory, FunctionRegistry, FunctionSignature, Functor, HookRegistry, hook_fn};

/// Module id of the demo documentation hook.
pub const DOC_HOOK: &str = "doc";

#[derive(Debug, Clone, Copy, Classify)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

#[derive(Debug, Clone, Copy, Classify)]
pub enum Shape {
    Triangle,
    Square,
}

pub struct Scale {
    pub factor: f64,
}

impl Functor for Scale {
    type Params = (f64,);
    type Output = f64;

    fn call(&self, (x,): (f64,)) -> f64 {
        x * self.factor
    }
}

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn greet(name: &str) -> String {
    format!("hello, {name}")
}

fn describe(flag: bool, count: i32, label: String) -> f64 {
    if flag { f64::from(count) } else { label.len() as f64 }
}

fn origin() -> Point {
    Point { x: 0.0, y: 0.0 }
}

fn share(p: Point) -> Arc<Point> {
    Arc::new(p)
}

fn sides(shape: Shape) -> u32 {
    match shape {
        Shape::Triangle => 3,
        Shape::Square => 4,
    }
}

fn doc_line(name: &str, signature: &FunctionSignature<'_>, _function: &dyn Any) -> String {
    format!(
        "{name}: {} taking {} parameter(s), returning {}",
        signature.family,
        signature.param_count(),
        signature.return_type()
    )
}

fn hooks() -> Result<HookRegistry, HookError> {
    let mut hooks = HookRegistry::new();
    hooks.register(hook_fn(DOC_HOOK, doc_line))?;
    Ok(hooks)
}

/// Build the demo registry.
pub fn registry() -> miette::Result<FunctionRegistry> {
    let factory = FunctionFactory::with_hooks(hooks()?);
    let mut registry = FunctionRegistry::new();
    populate(&mut registry, &factory)?;
    Ok(registry)
}

fn populate(registry: &mut FunctionRegistry, factory: &FunctionFactory) -> miette::Result<()> {
    let entries = [
        factory.new_function("add", add),
        factory.new_function("greet", greet),
        factory.new_function("describe", describe),
        factory.new_function("sum", |xs: Vec<f64>| xs.iter().sum::<f64>()),
        factory.new_function("origin", origin),
        factory.new_function("share", share),
        factory.new_function("sides", sides),
        factory.new_function("length", Point::length),
        factory.new_function("distance", Point::distance),
        factory.new_function("translate", Point::translate),
        factory.new_function("scale", Scale { factor: 2.0 }),
    ];
    for entry in entries {
        registry.insert(entry)?;
    }
    Ok(())
}
