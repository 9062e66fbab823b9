use super::*;
use crate::autograd::Op;

#[test]
fn test_neg_forward_is_mul_by_minus_one() {
    let a = Value::new(3.0);
    let b = neg_op(&a);
    assert_eq!(b.data(), -3.0);
    assert_eq!(b.op(), Op::Mul);
    let operands = b.operands();
    assert_eq!(operands[0], a);
    assert_eq!(operands[1].data(), -1.0);
}

#[test]
fn test_neg_backward() {
    let a = Value::new(3.0);
    let b = -&a;
    b.backward();
    assert_eq!(a.grad(), -1.0);
}
