//! 关节链 - 节点与关节的树
//!
//! 所有节点和关节都存放在 arena 中，用 NodeId / JointId 互相引用。
//! 拓扑在构建阶段确定：不能重复挂接、不能成环、只能有一个根关节。

use glam::Mat4;

use super::joint::Joint;
use super::{DofAxis, DofMask, JointId, NodeId};
use crate::render::{Part, Renderer};
use crate::{MeadowError, Result};

/// 树节点
#[derive(Clone, Debug)]
pub struct Node {
    /// 节点名称
    pub name: String,
    /// 父关节框架内的固定局部变换
    transform: Mat4,
    /// 可渲染部件（不透明）
    part: Option<Part>,
    /// 子关节（有序）
    children: Vec<JointId>,
    /// 父关节（反向引用）
    parent_joint: Option<JointId>,
}

impl Node {
    #[inline]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    #[inline]
    pub fn part(&self) -> Option<Part> {
        self.part
    }

    #[inline]
    pub fn children(&self) -> &[JointId] {
        &self.children
    }

    #[inline]
    pub fn parent_joint(&self) -> Option<JointId> {
        self.parent_joint
    }
}

/// 关节链
#[derive(Clone, Debug, Default)]
pub struct KinematicChain {
    nodes: Vec<Node>,
    joints: Vec<Joint>,
    root: Option<JointId>,
}

impl KinematicChain {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================
    // 构建
    // ========================================

    /// 添加节点（尚未挂接）
    pub fn add_node(&mut self, name: impl Into<String>, transform: Mat4, part: Option<Part>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.into(),
            transform,
            part,
            children: Vec::new(),
            parent_joint: None,
        });
        id
    }

    /// 添加关节，把 `child` 挂到 `parent` 下；`parent` 为 None 时作为根关节
    pub fn add_joint(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
        child: NodeId,
        location: Mat4,
    ) -> Result<JointId> {
        self.check_node(child)?;
        if self.nodes[child.0].parent_joint.is_some() {
            return Err(MeadowError::NodeAlreadyAttached(child.0));
        }
        match parent {
            None => {
                if self.root.is_some() {
                    return Err(MeadowError::MultipleRoots);
                }
            }
            Some(p) => {
                self.check_node(p)?;
                // child 不能是 parent 的祖先
                let mut cur = Some(p);
                while let Some(n) = cur {
                    if n == child {
                        return Err(MeadowError::CycleDetected(child.0));
                    }
                    cur = self.nodes[n.0].parent_joint.and_then(|j| self.joints[j.0].parent);
                }
            }
        }

        let id = JointId(self.joints.len());
        self.joints.push(Joint::new(name.into(), parent, child, location));
        self.nodes[child.0].parent_joint = Some(id);
        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.root = Some(id),
        }
        Ok(id)
    }

    /// 配置关节自由度（每个关节只能一次）
    pub fn set_dof(&mut self, joint: JointId, mask: DofMask) -> Result<()> {
        self.joint_mut(joint)?.set_dof(joint.0, mask)
    }

    pub fn set_preference(&mut self, joint: JointId, axis: DofAxis, preference: f32) -> Result<()> {
        self.joint_mut(joint)?.set_preference(joint.0, axis, preference)
    }

    pub fn set_dof_value(&mut self, joint: JointId, axis: DofAxis, value: f32) -> Result<()> {
        self.joint_mut(joint)?.set_value(joint.0, axis, value)
    }

    pub fn add_dof_value(&mut self, joint: JointId, axis: DofAxis, delta: f32) -> Result<()> {
        let current = self.dof_value(joint, axis)?;
        self.set_dof_value(joint, axis, current + delta)
    }

    /// 读取开放自由度的当前值
    pub fn dof_value(&self, joint: JointId, axis: DofAxis) -> Result<f32> {
        self.joint(joint)?
            .dof(axis)
            .map(|d| d.value)
            .ok_or(MeadowError::DofNotFree { joint: joint.0, axis })
    }

    /// 检查树结构：恰好一个根，所有节点都可达
    pub fn validate(&self) -> Result<()> {
        let root = self.root.ok_or(MeadowError::MissingRoot)?;
        let mut reached = vec![false; self.nodes.len()];
        let mut stack = vec![self.joints[root.0].child];
        while let Some(n) = stack.pop() {
            reached[n.0] = true;
            stack.extend(self.nodes[n.0].children.iter().map(|j| self.joints[j.0].child));
        }
        match reached.iter().position(|r| !r) {
            Some(i) => Err(MeadowError::UnreachableNode(i)),
            None => Ok(()),
        }
    }

    // ========================================
    // 访问器
    // ========================================

    #[inline]
    pub fn root(&self) -> Option<JointId> {
        self.root
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(MeadowError::NodeOutOfRange(id.0))
    }

    pub fn joint(&self, id: JointId) -> Result<&Joint> {
        self.joints.get(id.0).ok_or(MeadowError::JointOutOfRange(id.0))
    }

    pub(crate) fn joint_mut(&mut self, id: JointId) -> Result<&mut Joint> {
        self.joints.get_mut(id.0).ok_or(MeadowError::JointOutOfRange(id.0))
    }

    /// 按名称查找节点
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    fn check_node(&self, id: NodeId) -> Result<()> {
        self.node(id).map(|_| ())
    }

    // ========================================
    // 变换计算
    // ========================================

    /// 从 `joint` 到根的关节路径（末端在前）
    pub(crate) fn path_to_root(&self, joint: JointId) -> Result<Vec<JointId>> {
        self.joint(joint)?;
        let mut path = vec![joint];
        let mut cur = self.joints[joint.0].parent;
        while let Some(node) = cur {
            match self.nodes[node.0].parent_joint {
                Some(j) => {
                    path.push(j);
                    cur = self.joints[j.0].parent;
                }
                None => break,
            }
        }
        Ok(path)
    }

    /// 全局变换 = base · loc(root)·artic(root) · … · loc(joint)·artic(joint)
    pub fn global_transform(&self, joint: JointId, base: Mat4) -> Result<Mat4> {
        let path = self.path_to_root(joint)?;
        Ok(path
            .iter()
            .rev()
            .fold(base, |acc, j| acc * self.joints[j.0].local_transform()))
    }

    /// 节点的世界变换 = 父关节全局变换 · node.transform
    pub fn node_world_transform(&self, node: NodeId, base: Mat4) -> Result<Mat4> {
        let n = self.node(node)?;
        match n.parent_joint {
            Some(j) => Ok(self.global_transform(j, base)? * n.transform),
            None => Ok(base * n.transform),
        }
    }

    /// 先序遍历，用显式变换栈；visitor 收到节点和它的世界变换
    pub fn draw<F>(&self, base: Mat4, mut visitor: F) -> Result<()>
    where
        F: FnMut(&Node, Mat4),
    {
        let root = self.root.ok_or(MeadowError::MissingRoot)?;
        let root_joint = &self.joints[root.0];
        let mut stack = vec![(root_joint.child, base * root_joint.local_transform())];

        while let Some((node_id, accumulated)) = stack.pop() {
            let node = &self.nodes[node_id.0];
            visitor(node, accumulated * node.transform);
            // 逆序压栈以保持子关节顺序
            for j in node.children.iter().rev() {
                let joint = &self.joints[j.0];
                stack.push((joint.child, accumulated * joint.local_transform()));
            }
        }
        Ok(())
    }

    /// 把带部件的节点交给渲染器
    pub fn render<R: Renderer>(&self, base: Mat4, renderer: &mut R) -> Result<()> {
        self.draw(base, |node, world| {
            if let Some(part) = node.part {
                renderer.draw(part.mesh, world, part.material);
            }
        })
    }
}
