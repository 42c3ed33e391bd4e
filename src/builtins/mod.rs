//! Built-in bindings.
//!
//! The core language has no literals or data constructors, so the initial
//! environment supplies them as ordinary names: booleans, integers,
//! conditionals, pairs, tagged unions and a fixed-point combinator.

use crate::infer::TypeEnv;
use crate::types::{TVar, Type, TypeScheme};

/// Create the initial type environment with built-in bindings.
pub fn initial_env() -> TypeEnv {
    let a = || Type::var(0);
    let b = || Type::var(1);
    let c = || Type::var(2);

    let mut env = TypeEnv::empty();

    // Booleans and integers
    env = env.extend("true", TypeScheme::mono(Type::bool()));
    env = env.extend("false", TypeScheme::mono(Type::bool()));
    env = env.extend("zero", TypeScheme::mono(Type::int()));
    env = env.extend(
        "succ",
        TypeScheme::mono(Type::func(Type::int(), Type::int())),
    );
    env = env.extend(
        "add",
        TypeScheme::mono(Type::func(
            Type::int(),
            Type::func(Type::int(), Type::int()),
        )),
    );
    env = env.extend(
        "eq",
        TypeScheme::mono(Type::func(
            Type::int(),
            Type::func(Type::int(), Type::bool()),
        )),
    );

    // if : Bool -> a -> a -> a
    env = env.extend(
        "if",
        TypeScheme::poly(
            [TVar(0)],
            Type::func(Type::bool(), Type::func(a(), Type::func(a(), a()))),
        ),
    );

    // Pairs
    env = env.extend(
        "pair",
        TypeScheme::poly(
            [TVar(0), TVar(1)],
            Type::func(a(), Type::func(b(), Type::product(a(), b()))),
        ),
    );
    env = env.extend(
        "fst",
        TypeScheme::poly(
            [TVar(0), TVar(1)],
            Type::func(Type::product(a(), b()), a()),
        ),
    );
    env = env.extend(
        "snd",
        TypeScheme::poly(
            [TVar(0), TVar(1)],
            Type::func(Type::product(a(), b()), b()),
        ),
    );

    // Tagged unions
    env = env.extend(
        "inl",
        TypeScheme::poly([TVar(0), TVar(1)], Type::func(a(), Type::sum(a(), b()))),
    );
    env = env.extend(
        "inr",
        TypeScheme::poly([TVar(0), TVar(1)], Type::func(b(), Type::sum(a(), b()))),
    );
    // case : a + b -> (a -> c) -> (b -> c) -> c
    env = env.extend(
        "case",
        TypeScheme::poly(
            [TVar(0), TVar(1), TVar(2)],
            Type::func(
                Type::sum(a(), b()),
                Type::func(
                    Type::func(a(), c()),
                    Type::func(Type::func(b(), c()), c()),
                ),
            ),
        ),
    );

    // fix : (a -> a) -> a
    env = env.extend(
        "fix",
        TypeScheme::poly([TVar(0)], Type::func(Type::func(a(), a()), a())),
    );

    env
}
