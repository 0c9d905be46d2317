//! Multi-swap router bindings.

use alloy_sol_types::sol;

sol! {
    /// Router dispatching swaps across the registered DEX factories
    contract ApeSwapMultiSwapRouter {
        constructor(address[] factories, address wrappedNative);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use alloy_sol_types::SolConstructor;

    #[test]
    fn test_constructor_encoding() {
        let call = ApeSwapMultiSwapRouter::constructorCall {
            factories: vec![Address::repeat_byte(1), Address::repeat_byte(2)],
            wrappedNative: Address::repeat_byte(3),
        };
        let encoded = call.abi_encode();

        // offset, wrappedNative, length, two factories
        assert_eq!(encoded.len(), 5 * 32);
        assert_eq!(&encoded[44..64], Address::repeat_byte(3).as_slice());
        assert_eq!(encoded[95], 2);
    }
}
