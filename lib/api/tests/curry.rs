use anyhow::Result;
use pretty_assertions::assert_eq;
use std::sync::Arc;

use fnbridge::*;

fn call_curried(f: FuncRef, args: &[Value]) -> Result<Value> {
    let (last, init) = args.split_last().expect("at least one argument");
    let mut current = f;
    for arg in init {
        let next = current.apply(arg.clone())?;
        current = next.func().cloned().expect("a curried link returns a function");
    }
    Ok(current.apply(last.clone())?)
}

#[test_log::test]
fn curried_and_tupled_agree_with_direct_application() -> Result<()> {
    let f: Arc<dyn Function2> = Arc::new(Specialized::new(|a: i64, b: i32| {
        a.wrapping_sub(i64::from(b))
    }));
    let curried = Arc::clone(&f).curried()?;
    let tupled = Arc::clone(&f).tupled()?;

    for (a, b) in [(0, 0), (-1, 1), (i64::MAX, -1), (i64::MIN, 0)] {
        let direct = f.apply(Value::I64(a), Value::I32(b))?;
        assert_eq!(call_curried(curried.clone(), &[Value::I64(a), Value::I32(b)])?, direct);
        assert_eq!(
            tupled.apply(Value::tuple([Value::I64(a), Value::I32(b)]))?,
            direct
        );
    }
    Ok(())
}

#[test_log::test]
fn curried_chains_are_independent() -> Result<()> {
    let f: Arc<dyn Function3> = Arc::new(Specialized::new(|a: i32, b: i32, c: i32| {
        100 * a + 10 * b + c
    }));
    let curried = f.curried()?;

    let with_1 = curried.apply(Value::I32(1))?;
    let with_1 = with_1.func().expect("function");
    let with_1_2 = with_1.apply(Value::I32(2))?;
    let with_1_5 = with_1.apply(Value::I32(5))?;

    let with_1_2 = with_1_2.func().expect("function");
    let with_1_5 = with_1_5.func().expect("function");
    assert_eq!(with_1_2.apply(Value::I32(3))?, Value::I32(123));
    assert_eq!(with_1_5.apply(Value::I32(3))?, Value::I32(153));
    assert_eq!(with_1_2.apply(Value::I32(9))?, Value::I32(129));
    Ok(())
}

#[test_log::test]
fn tupled_procedure_returns_unit() -> Result<()> {
    let f: Arc<dyn Function2> = Arc::new(Specialized::new(|_: bool, _: f32| ()));
    let tupled = f.tupled()?;
    assert_eq!(
        tupled.apply(Value::tuple([Value::Bool(true), Value::F32(0.5)]))?,
        Value::Unit
    );
    Ok(())
}

#[test_log::test]
fn tupled_checks_its_argument() -> Result<()> {
    let f: Arc<dyn Function2> = Arc::new(Specialized::new(|a: i32, b: i32| a * b));
    let tupled = f.tupled()?;

    let err = tupled
        .apply(Value::tuple([Value::I32(1), Value::I32(2), Value::I32(3)]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected a tuple of 2 values, found a tuple of 3 values"
    );

    let err = tupled.apply(Value::Ref(AnyRef::new(()))).unwrap_err();
    assert!(matches!(
        err,
        CallError::TupleMismatch {
            expected: 2,
            found: None
        }
    ));

    let err = tupled.apply(Value::Unit).unwrap_err();
    assert!(matches!(
        err,
        CallError::KindMismatch(KindMismatch {
            expected: Kind::Erased,
            found: Kind::Void
        })
    ));

    // Items are unboxed by the underlying bridge.
    let err = tupled
        .apply(Value::tuple([Value::I32(1), Value::I64(2)]))
        .unwrap_err();
    assert!(matches!(
        err,
        CallError::KindMismatch(KindMismatch {
            expected: Kind::I32,
            found: Kind::I64
        })
    ));
    Ok(())
}

#[test_log::test]
fn largest_supported_arity_curries() -> Result<()> {
    let f: Arc<dyn Function8> = Arc::new(Specialized::new(
        |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32, g: i32, h: i32| {
            a + b + c + d + e + f + g + h
        },
    ));
    assert!(curry_supported(8));
    let args: Vec<Value> = (1..=8).map(Value::I32).collect();
    assert_eq!(call_curried(f.curried()?, &args)?, Value::I32(36));
    Ok(())
}

#[test_log::test]
fn widest_contract_is_never_curried() {
    let f: Arc<dyn Function22> = Arc::new(Specialized::new(
        |_: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32,
         _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32,
         _: i32, _: i32| (),
    ));
    assert_eq!(
        Arc::clone(&f).curried().unwrap_err(),
        NotSupported {
            operation: "curried",
            arity: 22
        }
    );
    assert_eq!(
        f.tupled().unwrap_err().to_string(),
        "`tupled` is not supported for functions of arity 22"
    );
}

#[cfg(not(feature = "high-arity-curry"))]
#[test_log::test]
fn arity_above_default_bound_is_not_supported() {
    let f: Arc<dyn Function9> = Arc::new(Specialized::new(
        |a: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32, _: i32| a,
    ));
    assert_eq!(CURRY_ARITY_LIMIT, 8);
    let err = Arc::clone(&f).curried().unwrap_err();
    assert_eq!(err.arity, 9);
    let err = f.tupled().unwrap_err();
    assert_eq!(err.operation, "tupled");
}

#[cfg(feature = "high-arity-curry")]
#[test_log::test]
fn arity_21_curries_with_high_arity_feature() -> Result<()> {
    let f: Arc<dyn Function21> = Arc::new(Specialized::new(
        |a1: i64, a2: i64, a3: i64, a4: i64, a5: i64, a6: i64, a7: i64, a8: i64, a9: i64,
         a10: i64, a11: i64, a12: i64, a13: i64, a14: i64, a15: i64, a16: i64, a17: i64,
         a18: i64, a19: i64, a20: i64, a21: i64| {
            a1 + a2 + a3 + a4 + a5 + a6 + a7 + a8 + a9 + a10 + a11 + a12 + a13 + a14 + a15
                + a16 + a17 + a18 + a19 + a20 + a21
        },
    ));
    assert_eq!(CURRY_ARITY_LIMIT, 21);
    let args: Vec<Value> = (1..=21).map(Value::I64).collect();
    assert_eq!(call_curried(Arc::clone(&f).curried()?, &args)?, Value::I64(231));
    let tupled = f.tupled()?;
    assert_eq!(tupled.apply(Value::tuple(args))?, Value::I64(231));
    Ok(())
}

#[test_log::test]
fn composition_of_curried_links() -> Result<()> {
    let add: Arc<dyn Function2> = Arc::new(Specialized::new(|a: i32, b: i32| a + b));
    let add_ten = add.curried()?.apply(Value::I32(10))?;
    let add_ten = add_ten.func().cloned().expect("function");
    let square: FuncRef = Arc::new(Specialized::new(|a: i32| a * a));

    let f = add_ten.and_then(Arc::clone(&square));
    assert_eq!(f.apply(Value::I32(2))?, Value::I32(144));

    let g = square.and_then(f);
    assert_eq!(g.apply(Value::I32(2))?, Value::I32(196));
    Ok(())
}
