//! Mixed route quoter bindings.

use alloy_sol_types::sol;

sol! {
    /// Quoter for routes mixing v2 pairs and v3 pools
    #[sol(rpc)]
    contract MixedRouteQuoterV1 {
        constructor(address factory, address factoryV2, address WETH9);

        /// v3 factory the quoter was constructed with
        function factory() external view returns (address);

        /// v2 factory the quoter was constructed with
        function factoryV2() external view returns (address);

        /// Wrapped native token the quoter was constructed with
        function WETH9() external view returns (address);
    }
}
