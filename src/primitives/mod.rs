//! The built-in primitives, grouped by family. Each submodule owns one
//! family; `call` is the single entry point the engine dispatches to once
//! it has established that no user form shadows the name.

mod arithmetic;
mod boolean;
mod forms;
mod meta_io;
mod navigation;
mod radix;

use crate::interpreter::Interpreter;

/// `args[i]` defaulting to `""` when missing.
fn arg(args: &[String], i: usize) -> &str {
    args.get(i).map(String::as_str).unwrap_or("")
}

pub fn call(interp: &mut Interpreter, name: &str, args: &[String]) -> String {
    match name {
        "ds" => forms::ds(interp, args),
        "ss" => forms::ss(interp, args),
        "cl" => forms::cl(interp, args),
        "ln" => forms::ln(interp, args),
        "dd" => forms::dd(interp, args),
        "da" => forms::da(interp, args),
        "sr" => forms::sr(interp, args),

        "cc" => navigation::cc(interp, args),
        "cs" => navigation::cs(interp, args),
        "cn" => navigation::cn(interp, args),
        "in" => navigation::find_in(interp, args),
        "pf" => navigation::pf(interp, args),
        // `cr` names two unrelated primitives: pointer reset (one arg)
        // and radix conversion (three args). Resolved by argument count.
        "cr" => {
            if args.len() >= 2 {
                radix::convert(args)
            } else {
                navigation::cr_reset(interp, args)
            }
        }

        "ad" => arithmetic::ad(args),
        "su" => arithmetic::su(args),
        "ml" => arithmetic::ml(args),
        "dv" => arithmetic::dv(args),
        "eq" => arithmetic::eq(args),
        "gr" => arithmetic::gr(args),

        "bu" => boolean::bu(args),
        "bi" => boolean::bi(args),
        "bc" => boolean::bc(args),
        "bs" => boolean::bs(args),
        "br" => boolean::br(args),

        "sl" => radix::sl(args),
        "cd" => radix::cd(args),
        "dc" => radix::dc(args),

        "qm" => meta_io::qm(interp),
        "cm" => meta_io::cm(interp, args),
        "ps" => meta_io::ps(interp, args),
        "rc" => meta_io::rc(interp),
        "rs" => meta_io::rs(interp),
        "hl" => meta_io::hl(interp),
        "tn" => meta_io::tn(interp),
        "tf" => meta_io::tf(interp),

        "sb" | "fb" | "eb" | "ai" | "ao" | "sp" | "rp" => "N/A".to_string(),

        _ => String::new(),
    }
}
