//! 交互模块
//!
//! - `InteractionAdapter` - 接收节点激活事件，调用状态引擎并产出渲染指令
//! - `RenderSink` - 渲染端接口
//! - `RenderInstruction` / `NodeView` - 交给渲染端的数据

mod adapter;
mod render;

pub use adapter::InteractionAdapter;
pub use render::{NodeView, RenderInstruction, RenderSink};
